/*!
 * Prescription data model and formatting.
 *
 * This module holds the structured prescription record collected from a form
 * file, the required-field validation that gates the translation pipeline,
 * and the deterministic plain-text rendering sent to the translator.
 */

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use crate::errors::PrescriptionError;
use crate::file_utils::FileManager;

/// Maximum accepted patient age
const MAX_PATIENT_AGE: u32 = 120;

/// Kind of treatment prescribed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub enum TreatmentType {
    #[default]
    Medication,
    Therapy,
    Consultation,
}

impl std::fmt::Display for TreatmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Medication => "Medication",
            Self::Therapy => "Therapy",
            Self::Consultation => "Consultation",
        };
        write!(f, "{}", name)
    }
}

/// A single prescribed medication
///
/// All fields are free text; only the name is mandatory. Entries with an
/// empty name are dropped when the record is loaded.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MedicationEntry {
    /// Medication name
    pub name: String,

    /// Dosage instructions
    #[serde(default)]
    pub dosage: String,

    /// Intake frequency
    #[serde(default)]
    pub frequency: String,

    /// Duration of the course
    #[serde(default)]
    pub duration: String,
}

impl MedicationEntry {
    /// Create a new medication entry
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            duration: duration.into(),
        }
    }

    /// Whether this entry carries a usable medication name
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A complete prescription as collected from the form file
///
/// The record is created fresh per submission and never persisted; once
/// formatted it is treated as immutable input to the translation pipeline.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PrescriptionRecord {
    /// Patient full name (required)
    pub patient_name: String,

    /// Patient identifier
    #[serde(default)]
    pub patient_id: String,

    /// Patient age in years
    #[serde(default)]
    pub age: u32,

    /// Prescribing doctor's name
    #[serde(default)]
    pub doctor_name: String,

    /// Doctor's contact details
    #[serde(default)]
    pub doctor_contact: String,

    /// Diagnosis text
    #[serde(default)]
    pub diagnosis: String,

    /// Kind of treatment
    #[serde(default)]
    pub treatment_type: TreatmentType,

    /// Treatment start date
    pub treatment_start_date: NaiveDate,

    /// Treatment end date
    pub treatment_end_date: NaiveDate,

    /// Follow-up appointment date
    pub follow_up_date: NaiveDate,

    /// Prescribed medications, in form order (at least one required)
    #[serde(default)]
    pub medications: Vec<MedicationEntry>,

    /// Known allergies
    #[serde(default)]
    pub allergies: String,

    /// Special notes
    #[serde(default)]
    pub special_notes: String,
}

impl PrescriptionRecord {
    /// Load a prescription record from a JSON form file
    ///
    /// Medication entries without a name are dropped here so the rest of the
    /// pipeline only ever sees named entries.
    pub fn from_form_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        let mut record: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse form file: {:?}", path.as_ref()))?;
        record.medications.retain(|m| m.has_name());
        Ok(record)
    }

    /// Validate the required fields before the pipeline runs
    ///
    /// The translation client must never be invoked for a record that fails
    /// this check.
    pub fn validate(&self) -> Result<(), PrescriptionError> {
        if self.patient_name.trim().is_empty() {
            return Err(PrescriptionError::MissingPatientName);
        }

        if !self.medications.iter().any(|m| m.has_name()) {
            return Err(PrescriptionError::NoMedications);
        }

        if self.age > MAX_PATIENT_AGE {
            return Err(PrescriptionError::AgeOutOfRange(self.age));
        }

        Ok(())
    }

    /// Render the record into the fixed-layout prescription document
    ///
    /// The layout is deterministic: identical records always produce
    /// byte-identical text. User text is embedded verbatim, dates are
    /// rendered as DD-MM-YYYY, and medications are numbered from 1.
    pub fn format(&self) -> String {
        let mut text = String::new();

        let _ = write!(text, "Patient Details:\n\n");
        let _ = writeln!(text, "Patient Name: {}", self.patient_name);
        let _ = writeln!(text, "Patient ID: {}", self.patient_id);
        let _ = writeln!(text, "Age: {}", self.age);
        let _ = writeln!(text, "Doctor's Name: {}", self.doctor_name);
        let _ = writeln!(text, "Doctor's Contact: {}", self.doctor_contact);
        let _ = writeln!(text, "Diagnosis: {}", self.diagnosis);
        let _ = writeln!(text, "Treatment Type: {}", self.treatment_type);
        let _ = writeln!(
            text,
            "Treatment Start Date: {}",
            self.treatment_start_date.format("%d-%m-%Y")
        );
        let _ = writeln!(
            text,
            "Treatment End Date: {}",
            self.treatment_end_date.format("%d-%m-%Y")
        );
        let _ = writeln!(
            text,
            "Follow-Up Appointment Date: {}",
            self.follow_up_date.format("%d-%m-%Y")
        );
        let _ = write!(text, "\nMedications:\n\n");

        for (index, medication) in self
            .medications
            .iter()
            .filter(|m| m.has_name())
            .enumerate()
        {
            let _ = writeln!(text, "Medication {}:", index + 1);
            let _ = writeln!(text, "Medication Name: {}", medication.name);
            let _ = writeln!(text, "Dosage Instructions: {}", medication.dosage);
            let _ = writeln!(text, "Frequency: {}", medication.frequency);
            let _ = writeln!(text, "Duration: {}\n", medication.duration);
        }

        let allergies = if self.allergies.is_empty() {
            "None"
        } else {
            &self.allergies
        };
        let special_notes = if self.special_notes.is_empty() {
            "None"
        } else {
            &self.special_notes
        };
        let _ = writeln!(text, "Known Allergies:\n{}", allergies);
        let _ = writeln!(text, "Special Notes:\n{}", special_notes);

        text.trim().to_string()
    }
}
