use crate::currency;
use crate::error::NumberError;
use crate::notation::{CompactData, compact_data, exponent_suffix, percent};
use crate::options::{
    CompactDisplay, CurrencyDisplay, CurrencySign, Notation, NumberOptions, NumberStyle,
    SignDisplay, UnitDisplay,
};
use crate::unit;
use fixed_decimal::{Decimal, FloatPrecision, SignedRoundingMode, UnsignedRoundingMode};
use glossa_domain::constants::FALLBACK_LOCALE;
use glossa_locale::digits::{default_numbering_system, is_supported_numbering_system, localize_digits};
use glossa_locale::validate::is_valid_language;
use glossa_locale::{IntoLocaleList, Locale, resolve_candidates};
use icu_decimal::DecimalFormatter;
use icu_decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use std::sync::Arc;

const HALF_EXPAND: SignedRoundingMode = SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rounding {
    Fraction { min: u8, max: u8 },
    Significant { min: u8, max: u8 },
    /// Integers from two digits up, otherwise two significant digits.
    Compact,
}

/// Rendered absolute value.
struct Body {
    text: String,
    zero: bool,
    /// Renders exactly as `1`.
    one: bool,
}

/// Formats numbers for a locale.
///
/// ```rust
/// use glossa_number::{NumberFormat, NumberOptions, NumberStyle};
///
/// let options = NumberOptions::builder()
///     .style(NumberStyle::Currency)
///     .currency("EUR")
///     .use_grouping(true)
///     .minimum_integer_digits(7_u8)
///     .maximum_fraction_digits(2_u8)
///     .build();
/// let format = NumberFormat::try_new("en-IN", options).unwrap();
/// assert_eq!(format.format(123_456.789), "€01,23,456.79");
/// ```
#[derive(Debug, Clone)]
pub struct NumberFormat {
    locale: Locale,
    formatter: Arc<DecimalFormatter>,
    numbering_system: String,
    style: NumberStyle,
    notation: Notation,
    rounding: Rounding,
    compact: &'static CompactData,
    resolved: NumberOptions,
}

impl NumberFormat {
    /// Creates a formatter for the first candidate with a valid ISO language, else `en-US`.
    ///
    /// # Errors
    /// * [`NumberError::InvalidOption`] for a missing or malformed currency or unit, digit
    ///   options out of range or inverted, or a malformed numbering system.
    /// * [`NumberError::Data`] when decimal symbols cannot be loaded.
    pub fn try_new(
        locales: impl IntoLocaleList,
        options: NumberOptions,
    ) -> Result<Self, NumberError> {
        let locale = resolve_candidates(locales, FALLBACK_LOCALE, |l| is_valid_language(l.language()));
        let style = options.style.unwrap_or_default();
        let notation = options.notation.unwrap_or_default();

        let mut resolved = options;
        resolve_currency(&mut resolved, style)?;
        resolve_unit(&mut resolved, style)?;
        let rounding = resolve_digits(&mut resolved, style, notation)?;
        let numbering_system =
            resolve_numbering_system(&locale, resolved.numbering_system.as_deref())?;

        resolved.locale = Some(locale.base_name());
        resolved.style = Some(style);
        resolved.notation = Some(notation);
        resolved.numbering_system = Some(numbering_system.clone());
        resolved.use_grouping = Some(resolved.use_grouping.unwrap_or(true));
        resolved.minimum_integer_digits = Some(resolved.minimum_integer_digits.unwrap_or(1));
        resolved.sign_display = Some(resolved.sign_display.unwrap_or_default());
        if notation == Notation::Compact {
            resolved.compact_display = Some(resolved.compact_display.unwrap_or_default());
        }

        let formatter =
            decimal_formatter(&locale, &numbering_system, resolved.use_grouping != Some(false))?;
        tracing::debug!(locale = %locale, %style, %numbering_system, "NumberFormat resolved");

        Ok(Self {
            compact: compact_data(locale.language()),
            locale,
            formatter: Arc::new(formatter),
            numbering_system,
            style,
            notation,
            rounding,
            resolved,
        })
    }

    /// Renders `value`. `NaN` renders as `NaN`, infinities as `∞` with their sign.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return self.decorate("NaN", false);
        }
        let negative = value.is_sign_negative();
        let body = if value.is_infinite() {
            Body { text: "∞".to_owned(), zero: false, one: false }
        } else {
            match self.body(value.abs()) {
                Ok(body) => body,
                Err(err) => {
                    tracing::warn!(%err, value, "Value is outside the decimal range");
                    return value.to_string();
                }
            }
        };

        let text = self.decorate(&body.text, body.one);
        let sign_display = self.resolved.sign_display.unwrap_or_default();
        let show_sign = match sign_display {
            SignDisplay::Auto => negative,
            SignDisplay::Never => false,
            SignDisplay::Always => true,
            SignDisplay::ExceptZero => !body.zero,
            SignDisplay::Negative => negative && !body.zero,
        };

        let accounting = self.style == NumberStyle::Currency
            && self.resolved.currency_sign == Some(CurrencySign::Accounting);
        let text = match (show_sign, negative) {
            (true, true) if accounting => format!("({text})"),
            (true, true) => format!("-{text}"),
            (true, false) => format!("+{text}"),
            (false, _) => text,
        };
        localize_digits(&text, &self.numbering_system)
    }

    /// The options in force: constructor options merged with resolved defaults.
    #[must_use]
    pub fn resolved_options(&self) -> NumberOptions {
        self.resolved.clone()
    }

    #[must_use]
    pub fn get_resolved_options(&self) -> NumberOptions {
        self.resolved_options()
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    fn body(&self, magnitude: f64) -> Result<Body, NumberError> {
        let mut decimal = Decimal::try_from_f64(magnitude, FloatPrecision::RoundTrip)?;
        if self.style == NumberStyle::Percent {
            shift(&mut decimal, 2);
        }

        let (mut decimal, suffix) = match self.notation {
            Notation::Standard => {
                self.round(&mut decimal);
                (decimal, String::new())
            }
            Notation::Scientific => self.exponential(decimal, 1),
            Notation::Engineering => self.exponential(decimal, 3),
            Notation::Compact => self.compact(decimal),
        };
        if let Some(digits) = self.resolved.minimum_integer_digits
            && digits > 1
        {
            decimal.pad_start(i16::from(digits));
        }

        let one = decimal.to_string() == "1";
        let text = format!("{}{suffix}", self.formatter.format(&decimal));
        Ok(Body { text, zero: decimal.is_zero(), one })
    }

    fn round(&self, decimal: &mut Decimal) {
        match self.rounding {
            Rounding::Fraction { min, max } => {
                decimal.round_with_mode(-i16::from(max), HALF_EXPAND);
                decimal.trim_end();
                pad_fraction(decimal, -i16::from(min));
            }
            Rounding::Significant { min, max } => {
                if !decimal.is_zero() {
                    let top = decimal.nonzero_magnitude_start();
                    decimal.round_with_mode(top - i16::from(max) + 1, HALF_EXPAND);
                    decimal.trim_end();
                }
                let top = if decimal.is_zero() { 0 } else { decimal.nonzero_magnitude_start() };
                pad_fraction(decimal, top - i16::from(min) + 1);
            }
            Rounding::Compact => {
                let top = if decimal.is_zero() { 0 } else { decimal.nonzero_magnitude_start() };
                decimal.round_with_mode(if top >= 1 { 0 } else { top - 1 }, HALF_EXPAND);
                decimal.trim_end();
            }
        }
    }

    /// Mantissa and `E` suffix; `step` 3 keeps exponents at multiples of three.
    fn exponential(&self, mut decimal: Decimal, step: i16) -> (Decimal, String) {
        if decimal.is_zero() {
            self.round(&mut decimal);
            return (decimal, exponent_suffix(0));
        }
        let mut exponent = decimal.nonzero_magnitude_start().div_euclid(step) * step;
        shift(&mut decimal, -exponent);
        self.round(&mut decimal);
        // 9.9996 rounds to 10.000
        if decimal.nonzero_magnitude_start() >= step {
            shift(&mut decimal, -step);
            exponent += step;
            self.round(&mut decimal);
        }
        (decimal, exponent_suffix(exponent))
    }

    fn compact(&self, mut decimal: Decimal) -> (Decimal, String) {
        let magnitude = if decimal.is_zero() { 0 } else { decimal.nonzero_magnitude_start() };
        let Some(mut step) = self.compact.step(magnitude) else {
            self.round(&mut decimal);
            return (decimal, String::new());
        };
        shift(&mut decimal, -step);
        self.round(&mut decimal);

        // 999 999 rounds to 1000K, which is 1M.
        if !decimal.is_zero()
            && let Some(next) = self.compact.step(decimal.nonzero_magnitude_start() + step)
            && next != step
        {
            shift(&mut decimal, step - next);
            self.round(&mut decimal);
            step = next;
        }
        let display = self.resolved.compact_display.unwrap_or_default();
        (decimal, self.compact.suffix(step, display))
    }

    /// Wraps the rendered absolute value with the style's symbol, code, name or unit.
    fn decorate(&self, amount: &str, one: bool) -> String {
        let plural = !one;
        match self.style {
            NumberStyle::Decimal => amount.to_owned(),
            NumberStyle::Percent => percent(amount, self.locale.language()),
            NumberStyle::Currency => {
                let code = self.resolved.currency.as_deref().unwrap_or_default();
                let display = self.resolved.currency_display.unwrap_or_default();
                let affix = currency::affix(code, display, &self.locale, plural);
                currency::place(amount, &affix, display, &self.locale)
            }
            NumberStyle::Unit => {
                let unit = self.resolved.unit.as_deref().unwrap_or_default();
                let display = self.resolved.unit_display.unwrap_or_default();
                unit::apply(amount, unit, display, plural)
            }
        }
    }
}

/// Scales by `10^delta` and drops the leading zeros the shift leaves behind.
fn shift(decimal: &mut Decimal, delta: i16) {
    decimal.multiply_pow10(delta);
    decimal.absolute.trim_start();
}

/// Pads with trailing zeros down to a fraction `position`; integer positions are left alone.
fn pad_fraction(decimal: &mut Decimal, position: i16) {
    if position < 0 {
        decimal.pad_end(position);
    }
}

/// Symbols come from the numbering system when ICU has data for it; digits ICU leaves in
/// `latn` are transliterated by [`NumberFormat::format`].
fn decimal_formatter(
    locale: &Locale,
    numbering_system: &str,
    grouping: bool,
) -> Result<DecimalFormatter, NumberError> {
    let tag = format!("{}-u-nu-{numbering_system}", locale.base_name());
    let icu_locale: icu_locale::Locale = tag.parse().map_err(|err| NumberError::Internal {
        message: format!("Cannot rebuild '{tag}': {err}").into(),
        context: None,
    })?;

    let mut options = DecimalFormatterOptions::default();
    if !grouping {
        options.grouping_strategy = Some(GroupingStrategy::Never);
    }
    Ok(DecimalFormatter::try_new((&icu_locale).into(), options)?)
}

fn resolve_currency(options: &mut NumberOptions, style: NumberStyle) -> Result<(), NumberError> {
    match options.currency.take() {
        Some(code) if !currency::is_well_formed(&code) => {
            return Err(NumberError::invalid_option("currency", code));
        }
        Some(code) => options.currency = Some(code.to_ascii_uppercase()),
        None if style == NumberStyle::Currency => {
            return Err(NumberError::InvalidOption {
                option: "currency",
                value: String::new(),
                context: Some("Required when style is currency".into()),
            });
        }
        None => {}
    }
    if style == NumberStyle::Currency {
        options.currency_display = Some(options.currency_display.unwrap_or_default());
        options.currency_sign = Some(options.currency_sign.unwrap_or_default());
    }
    Ok(())
}

fn resolve_unit(options: &mut NumberOptions, style: NumberStyle) -> Result<(), NumberError> {
    match options.unit.as_deref() {
        Some(unit) if !unit::is_supported(unit) => {
            return Err(NumberError::invalid_option("unit", unit));
        }
        None if style == NumberStyle::Unit => {
            return Err(NumberError::InvalidOption {
                option: "unit",
                value: String::new(),
                context: Some("Required when style is unit".into()),
            });
        }
        _ => {}
    }
    if style == NumberStyle::Unit {
        options.unit_display = Some(options.unit_display.unwrap_or_default());
    }
    Ok(())
}

fn check_range(option: &'static str, value: Option<u8>, min: u8, max: u8) -> Result<(), NumberError> {
    match value {
        Some(value) if !(min..=max).contains(&value) => Err(NumberError::invalid_option(option, value)),
        _ => Ok(()),
    }
}

/// Validates digit options and fills in the defaults of the style.
fn resolve_digits(
    options: &mut NumberOptions,
    style: NumberStyle,
    notation: Notation,
) -> Result<Rounding, NumberError> {
    check_range("minimumIntegerDigits", options.minimum_integer_digits, 1, 21)?;
    check_range("minimumFractionDigits", options.minimum_fraction_digits, 0, 20)?;
    check_range("maximumFractionDigits", options.maximum_fraction_digits, 0, 20)?;
    check_range("minimumSignificantDigits", options.minimum_significant_digits, 1, 21)?;
    check_range("maximumSignificantDigits", options.maximum_significant_digits, 1, 21)?;

    if options.uses_significant_digits() {
        let min = options.minimum_significant_digits.unwrap_or(1);
        let max = options.maximum_significant_digits.unwrap_or(21);
        if min > max {
            return Err(NumberError::invalid_option("maximumSignificantDigits", max));
        }
        options.minimum_significant_digits = Some(min);
        options.maximum_significant_digits = Some(max);
        return Ok(Rounding::Significant { min, max });
    }

    if notation == Notation::Compact && !options.has_digit_options() {
        options.minimum_fraction_digits = Some(0);
        options.maximum_fraction_digits = Some(0);
        return Ok(Rounding::Compact);
    }

    let (default_min, default_max) = match style {
        NumberStyle::Currency => {
            let digits = currency::minor_digits(options.currency.as_deref().unwrap_or_default());
            (digits, digits)
        }
        NumberStyle::Percent => (0, 0),
        NumberStyle::Decimal | NumberStyle::Unit => (0, 3),
    };
    let (min, max) = match (options.minimum_fraction_digits, options.maximum_fraction_digits) {
        (Some(min), Some(max)) if min > max => {
            return Err(NumberError::invalid_option("maximumFractionDigits", max));
        }
        (Some(min), Some(max)) => (min, max),
        (Some(min), None) => (min, default_max.max(min)),
        (None, Some(max)) => (default_min.min(max), max),
        (None, None) => (default_min, default_max),
    };
    options.minimum_fraction_digits = Some(min);
    options.maximum_fraction_digits = Some(max);
    Ok(Rounding::Fraction { min, max })
}

/// Option, then `-u-nu-`, then the language default. Unknown systems fall back to the default.
fn resolve_numbering_system(locale: &Locale, requested: Option<&str>) -> Result<String, NumberError> {
    if let Some(requested) = requested
        && (!(3..=8).contains(&requested.len())
            || !requested.bytes().all(|b| b.is_ascii_alphanumeric()))
    {
        return Err(NumberError::invalid_option("numberingSystem", requested));
    }

    let fallback = default_numbering_system(locale.language());
    let chosen = requested.or(locale.numbering_system()).unwrap_or(fallback);
    if is_supported_numbering_system(chosen) {
        Ok(chosen.to_owned())
    } else {
        tracing::warn!(numbering_system = chosen, fallback, "Unsupported numbering system");
        Ok(fallback.to_owned())
    }
}
