use crate::currency::NBSP;
use crate::options::CompactDisplay;

/// `(magnitude, short, long)`
type CompactStep = (i16, &'static str, &'static str);

#[derive(Debug)]
pub(crate) struct CompactData {
    language: &'static str,
    short_separator: &'static str,
    long_separator: &'static str,
    steps: &'static [CompactStep],
}

const NO_BREAK: &str = "\u{a0}";

static COMPACT: &[CompactData] = &[
    CompactData {
        language: "en",
        short_separator: "",
        long_separator: " ",
        steps: &[(3, "K", "thousand"), (6, "M", "million"), (9, "B", "billion"), (12, "T", "trillion")],
    },
    CompactData {
        language: "zh",
        short_separator: "",
        long_separator: "",
        steps: &[(4, "万", "万"), (8, "亿", "亿"), (12, "万亿", "万亿")],
    },
    CompactData {
        language: "ja",
        short_separator: "",
        long_separator: "",
        steps: &[(4, "万", "万"), (8, "億", "億"), (12, "兆", "兆")],
    },
    CompactData {
        language: "de",
        short_separator: NO_BREAK,
        long_separator: " ",
        steps: &[
            (3, "Tsd.", "Tausend"),
            (6, "Mio.", "Millionen"),
            (9, "Mrd.", "Milliarden"),
            (12, "Bio.", "Billionen"),
        ],
    },
    CompactData {
        language: "fr",
        short_separator: NO_BREAK,
        long_separator: " ",
        steps: &[(3, "k", "mille"), (6, "M", "millions"), (9, "Md", "milliards"), (12, "Bn", "billions")],
    },
    CompactData {
        language: "es",
        short_separator: NO_BREAK,
        long_separator: " ",
        steps: &[
            (3, "mil", "mil"),
            (6, "M", "millones"),
            (9, "mil M", "mil millones"),
            (12, "B", "billones"),
        ],
    },
];

/// Languages separating the percent sign with a no-break space.
const SPACED_PERCENT: &[&str] = &["cs", "da", "de", "es", "fi", "fr", "nb", "pl", "ru", "sv"];

/// Compact data for `language`, English when the language has none.
pub(crate) fn compact_data(language: &str) -> &'static CompactData {
    COMPACT.iter().find(|data| data.language == language).unwrap_or(&COMPACT[0])
}

impl CompactData {
    /// Largest step not above `magnitude`.
    pub(crate) fn step(&self, magnitude: i16) -> Option<i16> {
        self.steps.iter().rev().find(|(m, ..)| *m <= magnitude).map(|(m, ..)| *m)
    }

    /// Separator and label of `step`, e.g. `" thousand"`.
    pub(crate) fn suffix(&self, step: i16, display: CompactDisplay) -> String {
        let Some((_, short, long)) = self.steps.iter().find(|(m, ..)| *m == step) else {
            return String::new();
        };
        match display {
            CompactDisplay::Short => format!("{}{short}", self.short_separator),
            CompactDisplay::Long => format!("{}{long}", self.long_separator),
        }
    }
}

/// `E3`, `E-7`
pub(crate) fn exponent_suffix(exponent: i16) -> String {
    format!("E{exponent}")
}

pub(crate) fn percent(amount: &str, language: &str) -> String {
    if SPACED_PERCENT.contains(&language) {
        format!("{amount}{NBSP}%")
    } else {
        format!("{amount}%")
    }
}
