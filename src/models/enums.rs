use crate::provider::ProviderError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ProviderError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ProviderError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// Reference-range classification of a single reading. Distinct from
// RiskTier: the two three-way taxonomies must never be conflated.
str_enum!(RangeStatus {
    Normal => "normal",
    Borderline => "borderline",
    Critical => "critical",
});

impl RangeStatus {
    /// Badge styling token for the summary table.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Normal => "risk-green",
            Self::Borderline => "risk-yellow",
            Self::Critical => "risk-red",
        }
    }
}

// Gauge-score classification of a 0–100 risk score.
str_enum!(RiskTier {
    Low => "low",
    Moderate => "moderate",
    High => "high",
});

impl RiskTier {
    /// Stroke/fill color for the gauge arc and needle.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Low => "#10b981",
            Self::Moderate => "#f59e0b",
            Self::High => "#ef4444",
        }
    }

    /// Badge styling token for the risk pill.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "risk-green",
            Self::Moderate => "risk-yellow",
            Self::High => "risk-red",
        }
    }

    /// Human-readable label ("Low" / "Moderate" / "High").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

str_enum!(TrendDirection {
    Up => "up",
    Down => "down",
    Flat => "flat",
});

str_enum!(AnomalySeverity {
    Medium => "medium",
    High => "high",
});
