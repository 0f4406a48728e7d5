use chrono_tz::Tz;
use thiserror::Error;
use tracing::warn;

/// Resolves the device's `"<region>_<variant>_<dst>"` time zone code to an IANA zone.
pub fn resolve_time_zone(code: &str) -> Result<Tz, TimeZoneError> {
    let tz = match code {
        "0" => Tz::Etc__UTC,
        "0_1_0" => Tz::Pacific__Kwajalein,
        "1_1_0" => Tz::Pacific__Pago_Pago,
        "2_1_0" => Tz::Pacific__Honolulu,
        "3_1_1" => Tz::America__Anchorage,
        "4_1_1" => Tz::America__Los_Angeles,
        "5_1_0" => Tz::America__Phoenix,
        "5_2_1" => Tz::America__Denver,
        "6_1_1" => Tz::America__Mexico_City,
        "6_2_1" => Tz::America__Chicago,
        "7_1_0" => Tz::America__Indiana__Indianapolis,
        "7_2_1" => Tz::America__New_York,
        "8_1_0" => Tz::America__Caracas,
        "8_2_1" => Tz::America__Halifax,
        "9_1_1" => Tz::America__St_Johns,
        "10_1_1" => Tz::America__Sao_Paulo,
        "11_1_1" => Tz::Atlantic__South_Georgia,
        "12_1_1" => Tz::Atlantic__Azores,
        "13_1_0" => Tz::Africa__Monrovia,
        "13_2_1" => Tz::Etc__UTC,
        "14_1_0" => Tz::Africa__Tunis,
        "14_2_1" => Tz::Europe__Rome,
        "15_1_0" => Tz::Africa__Johannesburg,
        "16_1_0" => Tz::Europe__Athens,
        "17_1_0" => Tz::Europe__Samara,
        "18_1_0" => Tz::Asia__Yekaterinburg,
        "19_1_0" => Tz::Asia__Kolkata,
        "20_1_0" => Tz::Asia__Omsk,
        "21_1_0" => Tz::Asia__Bangkok,
        "22_1_0" => Tz::Asia__Shanghai,
        "22_2_0" => Tz::Asia__Taipei,
        "23_1_0" => Tz::Asia__Tokyo,
        "24_1_0" => Tz::Pacific__Guam,
        "24_2_1" => Tz::Australia__Sydney,
        "25_1_0" => Tz::Pacific__Bougainville,
        "26_1_1" => Tz::Pacific__Auckland,
        _ => return Err(TimeZoneError::NotFound { code: code.to_string() }),
    };

    Ok(tz)
}

/// Like [`resolve_time_zone`], but an unknown code falls back to UTC after logging it.
pub fn resolve_time_zone_or_utc(code: &str) -> Tz {
    resolve_time_zone(code).unwrap_or_else(|e| {
        warn!("⚠️ {}, falling back to UTC", e);
        Tz::UTC
    })
}

#[derive(Error, Debug, PartialEq)]
pub enum TimeZoneError {
    #[error("time zone code {code:?} not found")]
    NotFound { code: String },
}
