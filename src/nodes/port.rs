//! Port sides for block connections

/// Which end of a block a port sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortSide {
    Input,
    Output,
}

impl std::fmt::Display for PortSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortSide::Input => f.write_str("input"),
            PortSide::Output => f.write_str("output"),
        }
    }
}
