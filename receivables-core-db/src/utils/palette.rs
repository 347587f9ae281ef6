/// Background and text colour of an avatar badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    pub background: &'static str,
    pub color: &'static str,
}

pub const BADGE_PALETTE: [BadgeColors; 6] = [
    BadgeColors { background: "#DBEAFE", color: "#2563EB" },
    BadgeColors { background: "#F3E8FF", color: "#9333EA" },
    BadgeColors { background: "#FFEDD5", color: "#EA580C" },
    BadgeColors { background: "#FEE2E2", color: "#DC2626" },
    BadgeColors { background: "#E0E7FF", color: "#4F46E5" },
    BadgeColors { background: "#CCFBF1", color: "#0D9488" },
];

/// Colours for the row at `index`, cycling through the palette
pub fn badge_colors(index: usize) -> BadgeColors {
    BADGE_PALETTE[index % BADGE_PALETTE.len()]
}
