use chrono::{DateTime, Local, TimeZone, Utc};
use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub primary: (u8, u8, u8),   // ids, actions
    pub secondary: (u8, u8, u8), // titles
    pub timestamp: (u8, u8, u8), // timestamps
    pub muted: (u8, u8, u8),     // placeholders, separators
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        primary: (108, 112, 134),   // Gray
        secondary: (148, 226, 213), // Teal
        timestamp: (137, 180, 250), // Blue
        muted: (88, 91, 112),       // Surface
    };
}

/// Formatting context passed through rendering pipeline
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8), bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let painted = Paint::rgb(text, r, g, b);
        if bold { painted.bold().to_string() } else { painted.to_string() }
    }

    pub fn format_id(&self, id: &str) -> String {
        self.paint(id, self.palette.primary, false)
    }

    pub fn format_header(&self, text: &str) -> String {
        self.paint(text, self.palette.secondary, true)
    }

    pub fn format_timestamp(&self, ts: &str) -> String {
        self.paint(ts, self.palette.timestamp, false)
    }

    pub fn format_muted(&self, text: &str) -> String {
        self.paint(text, self.palette.muted, false)
    }
}

/// Timestamp formatting with relative/absolute modes
pub struct TimeFormatter {
    relative_mode: bool,
    now_ms: i64,
}

impl TimeFormatter {
    pub fn new(relative_mode: bool, now_ms: i64) -> Self {
        Self { relative_mode, now_ms }
    }

    pub fn format(&self, ms: i64) -> String {
        if self.relative_mode {
            return self.format_relative(ms);
        }
        match Local.timestamp_millis_opt(ms).single() {
            Some(dt) => format_local(&dt),
            None => ms.to_string(),
        }
    }

    pub fn format_relative(&self, ms: i64) -> String {
        let (Some(then), Some(now)) = (
            Utc.timestamp_millis_opt(ms).single(),
            Utc.timestamp_millis_opt(self.now_ms).single(),
        ) else {
            return ms.to_string();
        };
        let dur = now.signed_duration_since(then);
        let total_minutes = dur.num_minutes().max(0);
        let total_hours = dur.num_hours().max(0);
        let total_days = dur.num_days().max(0);

        if total_hours == 0 {
            if total_minutes == 0 {
                return "just now".to_string();
            }
            return format!("{}m ago", total_minutes);
        }
        if total_days == 0 {
            return format!("{}h ago", total_hours);
        }
        if total_days < 30 {
            let hours = (total_hours - total_days * 24).max(0);
            if hours > 0 {
                format!("{}d {}h ago", total_days, hours)
            } else {
                format!("{}d ago", total_days)
            }
        } else if total_days < 365 {
            let months = total_days / 30;
            let days = total_days % 30;
            if days > 0 {
                format!("{}mo {}d ago", months, days)
            } else {
                format!("{}mo ago", months)
            }
        } else {
            let years = total_days / 365;
            let months = (total_days % 365) / 30;
            if months > 0 {
                format!("{}y {}mo ago", years, months)
            } else {
                format!("{}y ago", years)
            }
        }
    }
}

/// `M/D/YYYY, h:mm:ss AM` in the given zone.
pub fn format_local<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
