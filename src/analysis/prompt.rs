// src/analysis/prompt.rs
//! Encodes the transparency rule set into a single instruction for the model

use crate::posting::PostingInput;
use crate::utils::format_usd;

/// Working hours per year used to annualise hourly pay
pub const HOURS_PER_YEAR: u64 = 2080;

/// Largest allowed gap between the top and bottom of an annual salary range
pub const MAX_ANNUAL_SPREAD: u64 = 50_000;

/// Hourly bounds of the worked example given to the model
const EXAMPLE_HOURLY_RANGE: (u64, u64) = (20, 60);

pub const CONNECTION_TEST_PROMPT: &str = r#"Say "Hello, Ollama is working!" in one sentence."#;

/// Build the full compliance prompt for one posting. Pure: the same posting
/// always yields the same text.
pub fn build_analysis_prompt(posting: &PostingInput) -> String {
    let (low, high) = EXAMPLE_HOURLY_RANGE;
    let low_annual = low * HOURS_PER_YEAR;
    let high_annual = high * HOURS_PER_YEAR;

    let hours = HOURS_PER_YEAR;
    let max_spread = format_usd(MAX_ANNUAL_SPREAD);
    let max_spread_short = format!("${}k", MAX_ANNUAL_SPREAD / 1000);
    let example_low = format_usd(low_annual);
    let example_high = format_usd(high_annual);
    let example_spread = format_usd(high_annual - low_annual);

    let title = posting.display_title();
    let salary = posting.display_salary();
    let ai_used = posting.display_ai_used();
    let description = posting.description.as_str();
    let requirements = posting.display_requirements();

    format!(
        r#"You are a Transparency Compliance Officer. Analyze this job posting against the following strict rules:

1. **Salary Transparency**:
   - **Missing Salary**: If the provided 'Salary' field is "Not specified", empty, missing, or "Competitive", this is a VIOLATION. Report as "Salary not specified".
   - **Range Spread**:
     - You must calculate the annual salary spread.
     - If given as an annual range (e.g. "$100k-$180k"), the difference (Max - Min) must NOT exceed {max_spread}.
     - **Hourly Rates**: If given as an hourly rate (e.g. "${low}-${high}/hr"), CONVERT to annual (multiply by {hours} hours).
       - Example: ${low}/hr = {example_low}. ${high}/hr = {example_high}. Spread = {example_spread} -> VIOLATION (> {max_spread_short}).
     - If the calculated spread exceeds {max_spread}, it is a VIOLATION.

2. **Canadian Experience**:
   - **STRICTLY FORBIDDEN**: Check both 'Description' and 'Requirements' text thoroughly.
   - If the text mentions "Canadian experience", "experience in Canada", or "local experience in Canada" as a necessity, it is a VIOLATION.
   - Fail immediately if any variation of "Canadian experience" is required.

3. **AI Usage**:
   - **Declared Usage**: The employer's metadata says AI used: "{ai_used}".
   - If declared as "Yes", the text MUST explicitly disclose using AI for hiring/screening. If not disclosed -> VIOLATION ("Undisclosed AI usage in hiring").
   - **Inferred Usage**: If AI usage is NOT declared (or "Unknown"), analyze the text yourself:
     - Does the text mention using AI/ML tools for candidate screening? If yes -> VIOLATION (if not declared in metadata).
     - Does the *writing style* strongly suggest the job posting itself was written by AI (e.g., excessive buzzwords, "delve", "landscape", generic structure)? If yes -> VIOLATION ("Suspected AI-generated posting without disclosure").

4. **Vacancy Disclosure**:
   - The posting MUST state if it is for an "existing vacancy" or a "new position".

Job Details:
- Title: {title}
- Salary: {salary}
- AI Used in Hiring: {ai_used}
- Description: {description}
- Requirements: {requirements}

Respond ONLY with valid JSON:
{{
  "is_transparent": true or false,
  "issues": ["list of specific violations found. Be concise."]
}}"#
    )
}
