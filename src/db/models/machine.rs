use crate::db::schema::machine;
use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use mechinsight_api::TelemetryRecord;

/// One `machine` row, keyed by `(id, timestamp)`.
///
/// Samples are append-only; the `predicted_*` columns are written by the
/// external prediction pipeline together with the sensor readings.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = machine)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TelemetrySample {
    pub id: i32,
    pub timestamp: DateTime<Utc>,
    pub vibration_rms: f64,
    pub motor_temp_c: f64,
    pub spindle_current_a: f64,
    pub rpm: f64,
    pub cutting_force_n: f64,
    pub power_consumption_w: f64,
    pub predicted_health_score: f64,
    pub predicted_anomaly: bool,
    pub anomaly_score: f64,
    pub predicted_anomaly_type: Option<String>,
    pub predicted_days_to_maintenance: f64,
}

impl From<TelemetrySample> for TelemetryRecord {
    fn from(sample: TelemetrySample) -> Self {
        TelemetryRecord {
            id: sample.id,
            timestamp: sample.timestamp,
            vibration_rms: sample.vibration_rms,
            motor_temp_c: sample.motor_temp_c,
            spindle_current_a: sample.spindle_current_a,
            rpm: sample.rpm,
            cutting_force_n: sample.cutting_force_n,
            power_consumption_w: sample.power_consumption_w,
            predicted_health_score: sample.predicted_health_score,
            predicted_anomaly: sample.predicted_anomaly,
            anomaly_score: sample.anomaly_score,
            predicted_anomaly_type: sample.predicted_anomaly_type,
            predicted_days_to_maintenance: sample.predicted_days_to_maintenance,
        }
    }
}
