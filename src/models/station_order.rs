/// Preferred top-to-bottom order of stations on the diagram
///
/// Only a hint: stations missing from it are still drawn, after the listed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationOrder {
    stations: Vec<String>,
}

impl StationOrder {
    /// Build an order from names, dropping blanks and repeated names
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stations: Vec<String> = Vec::new();
        for name in names {
            let name: String = name.into();
            let name = name.trim();
            if name.is_empty() || stations.iter().any(|s| s == name) {
                continue;
            }
            stations.push(name.to_string());
        }
        Self { stations }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
