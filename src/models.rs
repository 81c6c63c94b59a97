use crate::constants::*;
use crate::errors::AppError;
use std::str::FromStr;

/// Coarse geographic grouping of Colombian departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Amazonia,
    Orinoquia,
    Andina,
    Caribe,
    Pacifica,
    Otra,
}

impl Region {
    /// Membership lists in priority order; the first list containing the department wins.
    const MEMBERSHIP: [(Region, &'static [&'static str]); 5] = [
        (Region::Amazonia, AMAZONIA),
        (Region::Orinoquia, ORINOQUIA),
        (Region::Andina, ANDINA),
        (Region::Caribe, CARIBE),
        (Region::Pacifica, PACIFICA),
    ];

    /// Assigns a region from the department name exactly as published
    /// (case and diacritics sensitive).
    pub fn from_department(department: &str) -> Self {
        Self::MEMBERSHIP
            .iter()
            .find(|(_, members)| members.contains(&department))
            .map(|(region, _)| *region)
            .unwrap_or(Region::Otra)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amazonia => "AMAZONIA",
            Self::Orinoquia => "ORINOQUIA",
            Self::Andina => "ANDINA",
            Self::Caribe => "CARIBE",
            Self::Pacifica => "PACIFICA",
            Self::Otra => "OTRA",
        }
    }
}

/// File format for the prepared table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Parquet,
    Csv,
}

impl OutputFormat {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Parquet => "Parquet",
            Self::Csv => "CSV",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "parquet" | "pq" => Ok(Self::Parquet),
            "csv" => Ok(Self::Csv),
            other => Err(AppError::InvalidInput(format!(
                "Unknown output format '{other}' (expected 'parquet' or 'csv')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_known_departments() {
        assert_eq!(Region::from_department("Antioquia"), Region::Andina);
        assert_eq!(Region::from_department("Meta"), Region::Orinoquia);
        assert_eq!(Region::from_department("Chocó"), Region::Pacifica);
        assert_eq!(Region::from_department("Guainía"), Region::Amazonia);
        assert_eq!(
            Region::from_department("San Andrés, Providencia y Santa Catalina"),
            Region::Caribe
        );
    }

    #[test]
    fn test_region_unlisted_department_is_otra() {
        assert_eq!(Region::from_department("Atlantis"), Region::Otra);
        assert_eq!(Region::from_department(""), Region::Otra);
    }

    #[test]
    fn test_region_matching_is_exact() {
        // Upper-cased or unaccented spellings are not members
        assert_eq!(Region::from_department("ANTIOQUIA"), Region::Otra);
        assert_eq!(Region::from_department("Choco"), Region::Otra);
    }

    #[test]
    fn test_region_as_str() {
        assert_eq!(Region::Andina.as_str(), "ANDINA");
        assert_eq!(Region::Otra.as_str(), "OTRA");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("parquet".parse::<OutputFormat>().unwrap(), OutputFormat::Parquet);
        assert_eq!(" CSV ".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }
}
