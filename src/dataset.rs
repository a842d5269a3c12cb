use std::fmt;

/// Basenames picked up by the collector, matched exactly.
pub const TARGET_NAMES: [&str; 2] = ["1.png", "2.png"];

pub fn is_target_name(name: &str) -> bool {
    TARGET_NAMES.contains(&name)
}

/// Dataset transformation category, one subdirectory of the dataset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Remove,
    Translate,
    Rotate,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Remove, Operation::Translate, Operation::Rotate];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Remove => "remove",
            Operation::Translate => "translate",
            Operation::Rotate => "rotate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dataset partition, one subdirectory of each operation directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Test,
    Val,
}

impl Split {
    /// Collection order. Merging walks the splits as train, val, test.
    pub const ALL: [Split; 3] = [Split::Train, Split::Test, Split::Val];

    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
            Split::Val => "val",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
