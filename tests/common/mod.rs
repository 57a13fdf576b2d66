/*!
 * Common test utilities and fixtures
 */

use chrono::NaiveDate;

use scriptsense::prescription::{MedicationEntry, PrescriptionRecord, TreatmentType};

/// A fully populated, valid prescription record
pub fn sample_record() -> PrescriptionRecord {
    PrescriptionRecord {
        patient_name: "Asha".to_string(),
        patient_id: "P-1024".to_string(),
        age: 34,
        doctor_name: "Dr. Rao".to_string(),
        doctor_contact: "+91 98765 43210".to_string(),
        diagnosis: "Seasonal influenza".to_string(),
        treatment_type: TreatmentType::Medication,
        treatment_start_date: date(2025, 1, 5),
        treatment_end_date: date(2025, 1, 12),
        follow_up_date: date(2025, 1, 19),
        medications: vec![MedicationEntry::new(
            "Paracetamol",
            "500mg after meals",
            "Twice daily",
            "7 days",
        )],
        allergies: "Penicillin".to_string(),
        special_notes: "Drink plenty of fluids".to_string(),
    }
}

/// A record that fails validation (no patient name)
pub fn record_without_patient_name() -> PrescriptionRecord {
    let mut record = sample_record();
    record.patient_name = String::new();
    record
}

/// A record that fails validation (no named medication)
pub fn record_without_medications() -> PrescriptionRecord {
    let mut record = sample_record();
    record.medications.clear();
    record
}

/// Shorthand for building a date fixture
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
