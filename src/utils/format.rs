use chrono::{DateTime, Utc};

/// Formatear la fecha de creación de un report para la lista de actividad.
/// Formato fijo dd/mm/yyyy (determinista, independiente del locale del navegador).
pub fn format_report_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formatea_dd_mm_yyyy() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_report_date(&date), "01/01/2024");
    }

    #[test]
    fn formatea_desde_rfc3339() {
        let date: DateTime<Utc> = "2024-11-30T23:59:00Z".parse().unwrap();
        assert_eq!(format_report_date(&date), "30/11/2024");
    }
}
