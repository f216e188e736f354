use crate::domain::model::Reading;
use crate::utils::error::{FortuneError, Result};
use serde::Serialize;

/// CSV の1行。結果がない場合は結果列が空になる
#[derive(Debug, Clone, Serialize)]
pub struct ReadingRow {
    pub name: String,
    pub birth_date: String,
    pub period: String,
    pub level: Option<String>,
    pub keyword: Option<String>,
    pub color: Option<String>,
    pub zodiac: Option<String>,
    pub zodiac_keyword: Option<String>,
    pub period_label: Option<String>,
    pub life_path_number: Option<u32>,
    pub life_path_keyword: Option<String>,
    pub name_energy_number: Option<u32>,
    pub name_energy_keyword: Option<String>,
    pub message: Option<String>,
}

impl From<&Reading> for ReadingRow {
    fn from(reading: &Reading) -> Self {
        let result = reading.result.as_ref();
        Self {
            name: reading.request.name.clone(),
            birth_date: reading.request.birth_date.clone(),
            period: reading.request.period.as_str().to_string(),
            level: result.map(|r| r.level.label().to_string()),
            keyword: result.map(|r| r.keyword.clone()),
            color: result.map(|r| r.color.clone()),
            zodiac: result.map(|r| r.zodiac.name().to_string()),
            zodiac_keyword: result.map(|r| r.zodiac_keyword.clone()),
            period_label: result.map(|r| r.period_label.clone()),
            life_path_number: result.and_then(|r| r.life_path_number),
            life_path_keyword: result.map(|r| r.life_path_keyword.clone()),
            name_energy_number: result.and_then(|r| r.name_energy_number),
            name_energy_keyword: result.map(|r| r.name_energy_keyword.clone()),
            message: result.map(|r| r.message.clone()),
        }
    }
}

pub fn readings_to_csv(readings: &[Reading]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for reading in readings {
        writer.serialize(ReadingRow::from(reading))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FortuneError::ProcessingError {
            message: format!("Failed to flush CSV writer: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| FortuneError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn readings_to_json(readings: &[Reading]) -> Result<String> {
    Ok(serde_json::to_string_pretty(readings)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composer::compose_fortune;
    use crate::domain::model::{Period, ReadingRequest};

    fn reading(name: &str, birth_date: &str, period: Period) -> Reading {
        Reading {
            request: ReadingRequest {
                name: name.to_string(),
                birth_date: birth_date.to_string(),
                period,
            },
            result: compose_fortune(name, birth_date, period, 7),
        }
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let readings = vec![
            reading("山田 花子", "1990-05-01", Period::Today),
            reading("Nobody", "not-a-date", Period::Today),
        ];
        let csv = readings_to_csv(&readings).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("name,birth_date,period,level,keyword"));
        assert!(lines[1].starts_with("山田 花子,1990-05-01,today,吉,"));
        assert!(lines[2].starts_with("Nobody,not-a-date,today,,,,"));
    }

    #[test]
    fn test_json_keeps_null_result() {
        let readings = vec![reading("Nobody", "", Period::Tomorrow)];
        let json = readings_to_json(&readings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value[0]["result"].is_null());
        assert_eq!(value[0]["request"]["period"], "tomorrow");
    }
}
