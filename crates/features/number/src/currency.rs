use crate::options::CurrencyDisplay;
use glossa_locale::Locale;

/// No-break space between an amount and a trailing symbol or code.
pub(crate) const NBSP: char = '\u{a0}';

struct Currency {
    code: &'static str,
    /// Minor unit digits.
    digits: u8,
    symbol: &'static str,
    narrow: &'static str,
    /// `[en singular, en plural, zh]`
    names: [&'static str; 3],
}

const CURRENCIES: &[Currency] = &[
    Currency { code: "AUD", digits: 2, symbol: "A$", narrow: "$", names: ["Australian dollar", "Australian dollars", "澳大利亚元"] },
    Currency { code: "BRL", digits: 2, symbol: "R$", narrow: "R$", names: ["Brazilian real", "Brazilian reals", "巴西雷亚尔"] },
    Currency { code: "CAD", digits: 2, symbol: "CA$", narrow: "$", names: ["Canadian dollar", "Canadian dollars", "加拿大元"] },
    Currency { code: "CHF", digits: 2, symbol: "CHF", narrow: "CHF", names: ["Swiss franc", "Swiss francs", "瑞士法郎"] },
    Currency { code: "CNY", digits: 2, symbol: "CN¥", narrow: "¥", names: ["Chinese yuan", "Chinese yuan", "人民币"] },
    Currency { code: "EUR", digits: 2, symbol: "€", narrow: "€", names: ["euro", "euros", "欧元"] },
    Currency { code: "GBP", digits: 2, symbol: "£", narrow: "£", names: ["British pound", "British pounds", "英镑"] },
    Currency { code: "HKD", digits: 2, symbol: "HK$", narrow: "$", names: ["Hong Kong dollar", "Hong Kong dollars", "港元"] },
    Currency { code: "INR", digits: 2, symbol: "₹", narrow: "₹", names: ["Indian rupee", "Indian rupees", "印度卢比"] },
    Currency { code: "JPY", digits: 0, symbol: "¥", narrow: "¥", names: ["Japanese yen", "Japanese yen", "日元"] },
    Currency { code: "KRW", digits: 0, symbol: "₩", narrow: "₩", names: ["South Korean won", "South Korean won", "韩元"] },
    Currency { code: "MXN", digits: 2, symbol: "MX$", narrow: "$", names: ["Mexican peso", "Mexican pesos", "墨西哥比索"] },
    Currency { code: "RUB", digits: 2, symbol: "RUB", narrow: "₽", names: ["Russian ruble", "Russian rubles", "俄罗斯卢布"] },
    Currency { code: "TWD", digits: 2, symbol: "NT$", narrow: "$", names: ["New Taiwan dollar", "New Taiwan dollars", "新台币"] },
    Currency { code: "USD", digits: 2, symbol: "US$", narrow: "$", names: ["US dollar", "US dollars", "美元"] },
    Currency { code: "VND", digits: 0, symbol: "₫", narrow: "₫", names: ["Vietnamese dong", "Vietnamese dong", "越南盾"] },
];

/// Languages writing the currency before the amount.
const PREFIX_LANGUAGES: &[&str] = &["en", "zh", "ja", "ko", "hi"];

/// Three ASCII letters; case is normalized by the caller.
pub(crate) fn is_well_formed(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Minor unit digits of `code`, 2 for currencies without table data.
pub(crate) fn minor_digits(code: &str) -> u8 {
    find(code).map_or(2, |c| c.digits)
}

fn find(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Symbol as a locale writes it: the home locale of a currency uses its bare sign.
fn symbol(currency: &Currency, locale: &Locale) -> &'static str {
    match (currency.code, locale.language(), locale.region()) {
        ("USD", "en", None | Some("US")) | ("USD", "ja", _) => "$",
        ("CNY", "zh", _) => "¥",
        ("CNY", "ja", _) => "元",
        ("JPY", "ja", _) => "￥",
        ("JPY", "zh", _) => "JP¥",
        ("AUD", "en", Some("AU")) | ("CAD", "en", Some("CA")) => "$",
        ("HKD", "zh", Some("HK")) => "HK$",
        ("TWD", "zh", Some("TW")) => "$",
        _ => currency.symbol,
    }
}

/// Currency affix for `display`; unknown codes display as the code.
pub(crate) fn affix(code: &str, display: CurrencyDisplay, locale: &Locale, plural: bool) -> String {
    let Some(currency) = find(code) else {
        return code.to_owned();
    };
    match display {
        CurrencyDisplay::Symbol => symbol(currency, locale).to_owned(),
        CurrencyDisplay::NarrowSymbol => currency.narrow.to_owned(),
        CurrencyDisplay::Code => code.to_owned(),
        CurrencyDisplay::Name => match locale.language() {
            "zh" => currency.names[2].to_owned(),
            "en" => currency.names[usize::from(plural)].to_owned(),
            _ => code.to_owned(),
        },
    }
}

/// Joins an amount with its currency affix.
pub(crate) fn place(amount: &str, affix: &str, display: CurrencyDisplay, locale: &Locale) -> String {
    let language = locale.language();
    match display {
        CurrencyDisplay::Name if language == "zh" => format!("{amount}{affix}"),
        CurrencyDisplay::Name => format!("{amount} {affix}"),
        _ if !PREFIX_LANGUAGES.contains(&language) => format!("{amount}{NBSP}{affix}"),
        // `USD 1.00` but `$1.00`.
        _ if affix.ends_with(|c: char| c.is_ascii_alphabetic()) => format!("{affix}{NBSP}{amount}"),
        _ => format!("{affix}{amount}"),
    }
}
