//! Algorithm selection and sidebar rows.

use std::fmt;

/// Rasterization algorithm selection.
///
/// Exactly one algorithm is active at any time. The active algorithm also
/// decides the gesture: line algorithms take two clicks, the circle takes a
/// single click combined with the committed radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Naive slope-intercept stepping
    StepByStep,
    /// Digital differential analyzer
    Dda,
    /// Integer Bresenham line (initial selection)
    #[default]
    Bresenham,
    /// Midpoint circle around a clicked center
    Circle,
}

impl Algorithm {
    /// The three two-click line algorithms, in sidebar order.
    pub const LINES: [Algorithm; 3] = [Algorithm::StepByStep, Algorithm::Dda, Algorithm::Bresenham];

    /// Label shown in the sidebar and in reports.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::StepByStep => "Step by Step",
            Algorithm::Dda => "DDA",
            Algorithm::Bresenham => "Bresenham",
            Algorithm::Circle => "Circle",
        }
    }

    /// Whether this algorithm uses the two-click line gesture.
    pub fn is_line(self) -> bool {
        !matches!(self, Algorithm::Circle)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One clickable row of the sidebar tool list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    /// Selects an algorithm
    Algorithm(Algorithm),
    /// Empties the drawing (an action, never a persisted selection)
    Clear,
}

impl SidebarItem {
    /// All rows, top to bottom.
    pub const ALL: [SidebarItem; 5] = [
        SidebarItem::Algorithm(Algorithm::StepByStep),
        SidebarItem::Algorithm(Algorithm::Dda),
        SidebarItem::Algorithm(Algorithm::Bresenham),
        SidebarItem::Algorithm(Algorithm::Circle),
        SidebarItem::Clear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SidebarItem::Algorithm(algorithm) => algorithm.label(),
            SidebarItem::Clear => "Clear",
        }
    }
}
