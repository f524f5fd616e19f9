use crate::options::UnitDisplay;

/// `(identifier, short, narrow, long singular, long plural)`
type UnitNames = (&'static str, &'static str, &'static str, &'static str, &'static str);

/// Sanctioned simple units with English labels.
const UNITS: &[UnitNames] = &[
    ("acre", "ac", "ac", "acre", "acres"),
    ("bit", "bit", "bit", "bit", "bits"),
    ("byte", "byte", "B", "byte", "bytes"),
    ("celsius", "°C", "°C", "degree Celsius", "degrees Celsius"),
    ("centimeter", "cm", "cm", "centimeter", "centimeters"),
    ("day", "day", "d", "day", "days"),
    ("degree", "deg", "°", "degree", "degrees"),
    ("fahrenheit", "°F", "°", "degree Fahrenheit", "degrees Fahrenheit"),
    ("fluid-ounce", "fl oz", "fl oz", "fluid ounce", "fluid ounces"),
    ("foot", "ft", "′", "foot", "feet"),
    ("gallon", "gal", "gal", "gallon", "gallons"),
    ("gigabit", "Gb", "Gb", "gigabit", "gigabits"),
    ("gigabyte", "GB", "GB", "gigabyte", "gigabytes"),
    ("gram", "g", "g", "gram", "grams"),
    ("hectare", "ha", "ha", "hectare", "hectares"),
    ("hour", "hr", "h", "hour", "hours"),
    ("inch", "in", "″", "inch", "inches"),
    ("kilobit", "kb", "kb", "kilobit", "kilobits"),
    ("kilobyte", "kB", "kB", "kilobyte", "kilobytes"),
    ("kilogram", "kg", "kg", "kilogram", "kilograms"),
    ("kilometer", "km", "km", "kilometer", "kilometers"),
    ("liter", "L", "L", "liter", "liters"),
    ("megabit", "Mb", "Mb", "megabit", "megabits"),
    ("megabyte", "MB", "MB", "megabyte", "megabytes"),
    ("meter", "m", "m", "meter", "meters"),
    ("mile", "mi", "mi", "mile", "miles"),
    ("mile-scandinavian", "smi", "smi", "mile-scandinavian", "miles-scandinavian"),
    ("milliliter", "mL", "mL", "milliliter", "milliliters"),
    ("millimeter", "mm", "mm", "millimeter", "millimeters"),
    ("millisecond", "ms", "ms", "millisecond", "milliseconds"),
    ("minute", "min", "m", "minute", "minutes"),
    ("month", "mth", "m", "month", "months"),
    ("ounce", "oz", "oz", "ounce", "ounces"),
    ("percent", "%", "%", "percent", "percent"),
    ("petabyte", "PB", "PB", "petabyte", "petabytes"),
    ("pound", "lb", "lb", "pound", "pounds"),
    ("second", "sec", "s", "second", "seconds"),
    ("stone", "st", "st", "stone", "stones"),
    ("terabit", "Tb", "Tb", "terabit", "terabits"),
    ("terabyte", "TB", "TB", "terabyte", "terabytes"),
    ("week", "wk", "w", "week", "weeks"),
    ("yard", "yd", "yd", "yard", "yards"),
    ("year", "yr", "y", "year", "years"),
];

/// Short labels of common compound units.
const COMPOUNDS: &[(&str, &str)] = &[
    ("kilometer-per-hour", "km/h"),
    ("meter-per-second", "m/s"),
    ("mile-per-hour", "mph"),
    ("mile-per-gallon", "mpg"),
    ("liter-per-kilometer", "L/km"),
];

fn find(unit: &str) -> Option<&'static UnitNames> {
    UNITS.iter().find(|(id, ..)| *id == unit)
}

/// A simple unit or `<simple>-per-<simple>`.
pub(crate) fn is_supported(unit: &str) -> bool {
    match unit.split_once("-per-") {
        Some((numerator, denominator)) => find(numerator).is_some() && find(denominator).is_some(),
        None => find(unit).is_some(),
    }
}

/// Renders `amount` with the unit label.
pub(crate) fn apply(amount: &str, unit: &str, display: UnitDisplay, plural: bool) -> String {
    if let Some((numerator, denominator)) = unit.split_once("-per-") {
        let (Some(num), Some(den)) = (find(numerator), find(denominator)) else {
            return format!("{amount} {unit}");
        };
        return match display {
            UnitDisplay::Long => format!("{amount} {} per {}", long(num, plural), den.3),
            UnitDisplay::Short | UnitDisplay::Narrow => {
                match COMPOUNDS.iter().find(|(id, _)| *id == unit) {
                    Some((_, label)) => format!("{amount} {label}"),
                    None => format!("{amount} {}/{}", num.1, den.1),
                }
            }
        };
    }

    let Some(names) = find(unit) else {
        return format!("{amount} {unit}");
    };
    match display {
        UnitDisplay::Long => format!("{amount} {}", long(names, plural)),
        UnitDisplay::Narrow => format!("{amount}{}", names.2),
        UnitDisplay::Short if names.1 == "%" => format!("{amount}%"),
        UnitDisplay::Short => format!("{amount} {}", names.1),
    }
}

const fn long(names: &UnitNames, plural: bool) -> &'static str {
    if plural { names.4 } else { names.3 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_units() {
        assert!(is_supported("kilometer"));
        assert!(is_supported("kilometer-per-hour"));
        assert!(is_supported("byte-per-second"));
        assert!(!is_supported("furlong"));
        assert!(!is_supported("kilometer-per-fortnight"));
    }

    #[test]
    fn labels() {
        assert_eq!(apply("16", "kilometer", UnitDisplay::Short, true), "16 km");
        assert_eq!(apply("16", "kilometer", UnitDisplay::Long, true), "16 kilometers");
        assert_eq!(apply("1", "kilometer", UnitDisplay::Long, false), "1 kilometer");
        assert_eq!(apply("16", "kilometer", UnitDisplay::Narrow, true), "16km");
        assert_eq!(apply("50", "percent", UnitDisplay::Short, true), "50%");
        assert_eq!(apply("90", "kilometer-per-hour", UnitDisplay::Short, true), "90 km/h");
        assert_eq!(apply("3", "byte-per-second", UnitDisplay::Short, true), "3 byte/sec");
        assert_eq!(
            apply("90", "kilometer-per-hour", UnitDisplay::Long, true),
            "90 kilometers per hour"
        );
    }
}
