use serde::Deserialize;

/// Body of `POST /astro/compute`.
#[derive(Debug, Clone, Deserialize)]
pub struct AstroComputeInput {
    /// `YYYY-MM-DD`
    pub dob_date: String,
    /// `HH:MM` or `HH:MM:SS`
    pub dob_time: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name, e.g. `Asia/Kolkata`
    pub timezone: String,
    pub problem_context: String,
    pub uda_summary: String,
}

/// Domain view of a compute request.
///
/// `problem_context` and `summary_text` ride along untouched; no signal reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeRequest {
    pub birth_date: String,
    pub birth_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone_name: String,
    pub problem_context: String,
    pub summary_text: String,
}

impl From<AstroComputeInput> for ComputeRequest {
    fn from(input: AstroComputeInput) -> Self {
        Self {
            birth_date: input.dob_date,
            birth_time: input.dob_time,
            latitude: input.latitude,
            longitude: input.longitude,
            timezone_name: input.timezone,
            problem_context: input.problem_context,
            summary_text: input.uda_summary,
        }
    }
}
