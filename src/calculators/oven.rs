//! Oven temperature conversion between Fahrenheit, Celsius and gas marks.

use crate::format::{coerce_or_zero, js_round};
use serde::Serialize;

/// Degrees Fahrenheit a fan oven runs hotter than a conventional one.
pub const CONVECTION_OFFSET_F: f64 = 25.0;

/// Temperatures offered as one-click shortcuts, in °F.
pub const QUICK_TEMPS: [u32; 6] = [325, 350, 375, 400, 425, 450];

/// Gas marks and their Fahrenheit equivalents, coolest first.
pub const GAS_MARKS: [(&str, f64); 12] = [
    ("¼", 225.0),
    ("½", 250.0),
    ("1", 275.0),
    ("2", 300.0),
    ("3", 325.0),
    ("4", 350.0),
    ("5", 375.0),
    ("6", 400.0),
    ("7", 425.0),
    ("8", 450.0),
    ("9", 475.0),
    ("10", 500.0),
];

/// A row of the reference chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommonTemp {
    pub name: &'static str,
    pub fahrenheit: u32,
    pub celsius: u32,
    pub gas_mark: &'static str,
    pub uses: &'static [&'static str],
}

pub const COMMON_TEMPS: [CommonTemp; 11] = [
    CommonTemp {
        name: "Very Low",
        fahrenheit: 250,
        celsius: 120,
        gas_mark: "½",
        uses: &["Meringues", "Slow-drying"],
    },
    CommonTemp {
        name: "Low",
        fahrenheit: 275,
        celsius: 135,
        gas_mark: "1",
        uses: &["Slow roasting", "Drying herbs"],
    },
    CommonTemp {
        name: "Slow",
        fahrenheit: 300,
        celsius: 150,
        gas_mark: "2",
        uses: &["Slow cooking", "Stews"],
    },
    CommonTemp {
        name: "Moderately Slow",
        fahrenheit: 325,
        celsius: 165,
        gas_mark: "3",
        uses: &["Cakes", "Custards"],
    },
    CommonTemp {
        name: "Moderate",
        fahrenheit: 350,
        celsius: 175,
        gas_mark: "4",
        uses: &["Cookies", "Cakes", "General baking"],
    },
    CommonTemp {
        name: "Moderately Hot",
        fahrenheit: 375,
        celsius: 190,
        gas_mark: "5",
        uses: &["Pies", "Pastries"],
    },
    CommonTemp {
        name: "Hot",
        fahrenheit: 400,
        celsius: 200,
        gas_mark: "6",
        uses: &["Roasting vegetables", "Quick breads"],
    },
    CommonTemp {
        name: "Very Hot",
        fahrenheit: 425,
        celsius: 220,
        gas_mark: "7",
        uses: &["Roasting meat", "Pizza (home oven)"],
    },
    CommonTemp {
        name: "Very Hot",
        fahrenheit: 450,
        celsius: 230,
        gas_mark: "8",
        uses: &["Bread crusts", "Searing"],
    },
    CommonTemp {
        name: "Extremely Hot",
        fahrenheit: 475,
        celsius: 245,
        gas_mark: "9",
        uses: &["Pizza (high heat)", "Naan bread"],
    },
    CommonTemp {
        name: "Maximum",
        fahrenheit: 500,
        celsius: 260,
        gas_mark: "10",
        uses: &["Pizza stone", "Quick searing"],
    },
];

labeled_enum! {
    pub enum TemperatureUnit {
        Fahrenheit => "fahrenheit",
        Celsius => "celsius",
        GasMark => "gasmark",
    }
}

/// The same temperature in every unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub fahrenheit: f64,
    pub celsius: f64,
    pub gas_mark: &'static str,
    pub heat_level: &'static str,
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Fahrenheit equivalent of a gas mark label, e.g. `"½"` or `"4"`.
pub fn gas_mark_to_fahrenheit(mark: &str) -> Option<f64> {
    GAS_MARKS
        .iter()
        .find(|(label, _)| *label == mark.trim())
        .map(|&(_, f)| f)
}

/// The gas mark closest to `f`.
///
/// Whole-number marks are checked before the fractional ones and the first
/// mark checked keeps an exact tie, so 262.5 °F reads as mark 1, not ½.
pub fn nearest_gas_mark(f: f64) -> &'static str {
    let is_whole = |label: &str| label.bytes().all(|b| b.is_ascii_digit());
    let whole = GAS_MARKS.iter().filter(|entry| is_whole(entry.0));
    let fractional = GAS_MARKS.iter().filter(|entry| !is_whole(entry.0));

    let mut closest = GAS_MARKS[0].0;
    let mut min_diff = f64::INFINITY;
    for &(label, temp) in whole.chain(fractional) {
        let diff = (temp - f).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = label;
        }
    }
    closest
}

/// Descriptive band for a Fahrenheit temperature.
pub fn heat_level(f: f64) -> &'static str {
    if f < 275.0 {
        "Very Low"
    } else if f < 325.0 {
        "Low"
    } else if f < 350.0 {
        "Moderate Low"
    } else if f < 375.0 {
        "Moderate"
    } else if f < 425.0 {
        "Hot"
    } else if f < 475.0 {
        "Very Hot"
    } else {
        "Extremely Hot"
    }
}

/// Converts raw user input in `unit` to every unit.
///
/// Unparseable numbers and unknown gas marks read as zero. With `convection`
/// the result is the lower setting to use on a fan oven.
pub fn convert(input: &str, unit: TemperatureUnit, convection: bool) -> Conversion {
    let mut fahrenheit = match unit {
        TemperatureUnit::Fahrenheit => coerce_or_zero(input),
        TemperatureUnit::Celsius => celsius_to_fahrenheit(coerce_or_zero(input)),
        TemperatureUnit::GasMark => gas_mark_to_fahrenheit(input).unwrap_or(0.0),
    };
    if convection {
        fahrenheit -= CONVECTION_OFFSET_F;
    }
    let celsius = fahrenheit_to_celsius(fahrenheit);
    let rounded = js_round(fahrenheit);

    Conversion {
        fahrenheit: rounded,
        celsius: js_round(celsius),
        gas_mark: nearest_gas_mark(fahrenheit),
        heat_level: heat_level(rounded),
    }
}
