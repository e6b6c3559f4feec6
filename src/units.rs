//! Temperature display. Stored values are always Celsius.

/// Unit picked on the detail screen. Selector codes are 0, 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Unknown selectors fall back to Celsius.
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            1 => TemperatureUnit::Fahrenheit,
            2 => TemperatureUnit::Kelvin,
            _ => TemperatureUnit::Celsius,
        }
    }

    pub fn selector(self) -> i64 {
        match self {
            TemperatureUnit::Celsius => 0,
            TemperatureUnit::Fahrenheit => 1,
            TemperatureUnit::Kelvin => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::from_selector((self.selector() + 1) % 3)
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

/// Render a Celsius value in `unit`. Celsius is passed through untouched;
/// the other units are rounded to a whole degree and still shown with `.0`.
pub fn convert(unit: TemperatureUnit, celsius: f64) -> String {
    match unit {
        // `{:?}` keeps the shortest exact form and always shows a decimal.
        TemperatureUnit::Celsius => format!("{celsius:?} {}", unit.suffix()),
        TemperatureUnit::Fahrenheit => {
            format!("{:.1} {}", (celsius * 9.0 / 5.0 + 32.0).round(), unit.suffix())
        }
        TemperatureUnit::Kelvin => {
            format!("{:.1} {}", (celsius + 273.15).round(), unit.suffix())
        }
    }
}

/// Selector-based entry point matching the picker codes.
pub fn convert_selector(selector: i64, celsius: f64) -> String {
    convert(TemperatureUnit::from_selector(selector), celsius)
}
