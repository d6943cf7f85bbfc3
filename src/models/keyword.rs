/// Closed keyword sets a reviewer picks from.
/// Each variant carries the Korean label shown in the form and the code the backend expects.
use serde::{Deserialize, Serialize};

macro_rules! keyword_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($label:literal, $code:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                let label = label.trim();
                Self::ALL.iter().copied().find(|k| k.label() == label)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

keyword_set! {
    /// Season the perfume suits best.
    Season {
        Spring => ("봄", "SPRING"),
        Summer => ("여름", "SUMMER"),
        Fall => ("가을", "FALL"),
        Winter => ("겨울", "WINTER"),
    }
}

keyword_set! {
    /// How long the scent persists (지속력).
    Longevity {
        VeryWeak => ("매우 약함", "VERY_WEAK"),
        Weak => ("약함", "WEAK"),
        Medium => ("보통", "MEDIUM"),
        Strong => ("강함", "STRONG"),
        VeryStrong => ("매우 강함", "VERY_STRONG"),
    }
}

keyword_set! {
    /// Projection strength (확산력).
    Intensity {
        Weak => ("약함", "WEAK"),
        Medium => ("보통", "MEDIUM"),
        Strong => ("강함", "STRONG"),
    }
}

keyword_set! {
    Style {
        Daily => ("데일리", "DAILY"),
        Formal => ("포멀", "FORMAL"),
        Casual => ("캐주얼", "CASUAL"),
        Lovely => ("러블리", "LOVELY"),
        Chic => ("시크", "CHIC"),
        Pure => ("청순", "PURE"),
        Sexy => ("섹시", "SEXY"),
        Natural => ("내추럴", "NATURAL"),
    }
}

/// Adds a style, or removes it when already picked. Picking order is kept.
pub fn toggle_style(styles: &mut Vec<Style>, style: Style) {
    if styles.contains(&style) {
        styles.retain(|s| *s != style);
    } else {
        styles.push(style);
    }
}

/// Translates selected styles into the comma separated string the backend stores.
pub fn join_style_codes(styles: &[Style]) -> String {
    styles
        .iter()
        .map(|style| style.code())
        .collect::<Vec<_>>()
        .join(", ")
}
