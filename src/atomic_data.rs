#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, PartialOrd, Ord)]
pub struct AtomicNumber(pub u32);

#[derive(Debug, PartialEq, Eq)]
pub struct ElementData {
    pub anum: AtomicNumber,
    pub symbol: &'static str,
    pub name: &'static str,
}

impl ElementData {
    /// Entry 0 of the table: the placeholder used for dummy atoms, no protons.
    pub fn is_dummy(&self) -> bool {
        self.anum.0 == 0
    }
}
