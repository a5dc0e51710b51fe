use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One telemetry sample, returned verbatim from storage.
///
/// The `predicted_*` fields are produced by the external prediction models
/// and stored alongside the raw sensor readings.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TelemetryRecord {
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

/// Returned by signup and login on success.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /machine_details: latest sample per owned machine, newest first.
#[derive(Serialize, Deserialize, Debug)]
pub struct MachineListResponse {
    pub username: String,
    pub machines: Vec<TelemetryRecord>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(rename = "returnedCount")]
    pub returned_count: usize,
}

/// GET /machine_details/{machineId}: bounded history for one machine, newest first.
#[derive(Serialize, Deserialize, Debug)]
pub struct MachineDetailResponse {
    #[serde(rename = "machineId")]
    pub machine_id: i32,
    pub username: String,
    #[serde(rename = "timeSeriesData")]
    pub time_series_data: Vec<TelemetryRecord>,
    #[serde(rename = "dataPoints")]
    pub data_points: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32) -> TelemetryRecord {
        TelemetryRecord {
            id,
            timestamp: DateTime::from_timestamp(1_735_689_600, 0).expect("valid timestamp"),
            vibration_rms: 0.8,
            motor_temp_c: 65.0,
            spindle_current_a: 15.0,
            rpm: 3000.0,
            cutting_force_n: 200.0,
            power_consumption_w: 5000.0,
            predicted_health_score: 0.92,
            predicted_anomaly: false,
            anomaly_score: 0.04,
            predicted_anomaly_type: None,
            predicted_days_to_maintenance: 45.0,
        }
    }

    #[test]
    fn machine_list_response_uses_camel_case_counts() {
        let response = MachineListResponse {
            username: "alice".to_string(),
            machines: vec![record(1)],
            total_count: 2,
            returned_count: 1,
        };

        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["totalCount"], 2);
        assert_eq!(json["returnedCount"], 1);
        assert_eq!(json["machines"][0]["id"], 1);
    }

    #[test]
    fn machine_detail_response_uses_camel_case_keys() {
        let response = MachineDetailResponse {
            machine_id: 7,
            username: "alice".to_string(),
            time_series_data: vec![record(7), record(7)],
            data_points: 2,
        };

        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["machineId"], 7);
        assert_eq!(json["dataPoints"], 2);
        assert!(json["timeSeriesData"].is_array());
    }

    #[test]
    fn telemetry_record_keeps_storage_field_names() {
        let json = serde_json::to_value(record(3)).expect("serialize");

        for key in [
            "id",
            "timestamp",
            "motor_temp_c",
            "power_consumption_w",
            "cutting_force_n",
            "predicted_health_score",
            "predicted_anomaly",
            "anomaly_score",
            "predicted_anomaly_type",
            "predicted_days_to_maintenance",
        ] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
    }
}
