use bitflags::bitflags;

bitflags! {
    /// Declaration modifiers of a program element, as reported by either
    /// backend.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u32 {
        const PUBLIC    = 1;
        const PRIVATE   = 1 << 1;
        const PROTECTED = 1 << 2;
        const STATIC    = 1 << 3;
        const FINAL     = 1 << 4;
        const ABSTRACT  = 1 << 5;
    }
}

impl Modifiers {
    pub fn is_private(&self) -> bool {
        self.contains(Modifiers::PRIVATE)
    }

    pub fn is_protected(&self) -> bool {
        self.contains(Modifiers::PROTECTED)
    }

    /// Public or package-visible: anything not explicitly restricted.
    pub fn is_accessible(&self) -> bool {
        !self.is_private() && !self.is_protected()
    }
}
