//! Metric keys identifying measurable location attributes.
//!
//! The enum offers compile-time safety for catalogue lookups.
//!
//! # Examples
//! ```
//! use wohnwert_core::MetricKey;
//!
//! assert_eq!(MetricKey::Noise.as_str(), "noise");
//! assert_eq!(MetricKey::InternetSpeed.to_string(), "internet_speed");
//! ```

/// Identifier for a measurable attribute of a residential location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MetricKey {
    /// Ambient noise level in dB.
    Noise,
    /// Light pollution on the Bortle scale.
    Light,
    /// Crime incidents per 1000 residents.
    Crime,
    /// Available bandwidth in Mbps.
    InternetSpeed,
    /// Average age of the neighbourhood.
    Demographics,
    /// Grocery stores within reach.
    GroceryStores,
    /// Laundromats within reach.
    Laundromats,
    /// Parking facilities within reach.
    Parking,
}

impl MetricKey {
    /// Every metric key in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Noise,
        Self::Light,
        Self::Crime,
        Self::InternetSpeed,
        Self::Demographics,
        Self::GroceryStores,
        Self::Laundromats,
        Self::Parking,
    ];

    /// Return the key as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use wohnwert_core::MetricKey;
    ///
    /// assert_eq!(MetricKey::GroceryStores.as_str(), "grocery_stores");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Noise => "noise",
            Self::Light => "light",
            Self::Crime => "crime",
            Self::InternetSpeed => "internet_speed",
            Self::Demographics => "demographics",
            Self::GroceryStores => "grocery_stores",
            Self::Laundromats => "laundromats",
            Self::Parking => "parking",
        }
    }
}

impl std::fmt::Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MetricKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "noise" => Ok(Self::Noise),
            "light" => Ok(Self::Light),
            "crime" => Ok(Self::Crime),
            "internet_speed" => Ok(Self::InternetSpeed),
            "demographics" => Ok(Self::Demographics),
            "grocery_stores" => Ok(Self::GroceryStores),
            "laundromats" => Ok(Self::Laundromats),
            "parking" => Ok(Self::Parking),
            _ => Err(format!("unknown metric '{s}'")),
        }
    }
}
