//! Prompt constants and the deterministic prompt builder.
//!
//! Rendering is a pure function of its inputs — no randomness, no
//! time-dependence — so identical requests produce byte-identical prompts.
//! Embedded resume and job-description content is not sanitized or
//! interpreted; it is carried verbatim to the model.

/// System instruction sent with every evaluation call. The model is expected
/// (not guaranteed) to honor all four invariants.
pub const EVALUATION_SYSTEM: &str = "You are an expert HR professional and resume evaluator \
    with 15+ years of experience in talent acquisition and candidate assessment. You must: \
    1. Always respond with valid JSON format. \
    2. Be consistent in your evaluations - identical inputs must yield identical outputs. \
    3. Use the full 0-100 scoring range appropriately. \
    4. Provide specific, detailed, and actionable feedback with concrete examples. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Evaluation prompt template. Replace `{job_description}`, `{resume_text}`,
/// and `{links}` before sending.
const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate the following resume against the job description and produce a structured, evidence-based assessment.

JOB DESCRIPTION:
{job_description}

RESUME CONTENT:
{resume_text}

HYPERLINKS FOUND IN THE RESUME (portfolios, code hosting, social profiles):
{links}

SCORING RUBRIC — weight each dimension as stated (weights sum to 100%):
- Keyword and ATS match: 30%
- Experience relevance: 25%
- Qualifications and education: 20%
- Presentation and clarity: 15%
- Achievement impact: 10%

SCORING BANDS:
- 95-100: exceptional match
- 90-94: excellent match
- 80-89: strong match
- 70-79: good match
- 60-69: fair match
- below 60: poor match

--- OUTPUT FORMAT ---
Return a JSON object with EXACTLY these fields:
{
    "overall_score": <precise_score_0_to_100>,
    "strengths": ["specific strength with evidence from the resume"],
    "weaknesses": ["specific weakness with evidence from the resume"],
    "recommendations": ["specific, actionable improvement"],
    "skill_match": {"<skill category>": "<percentage>"},
    "experience_match": <precise_score_0_to_100>,
    "education_match": <precise_score_0_to_100>,
    "certification": ["certifications found in the resume, or what is missing for this role"],
    "detailed_analysis": "thorough narrative analysis of candidate fit",
    "fit_assessment": {
        "role_fit": "Excellent/Good/Fair/Poor",
        "experience_level_match": "Senior/Mid/Junior/Entry",
        "skill_level_assessment": "Above expectations/Meets requirements/Below requirements"
    },
    "social_media_links": {"<platform>": "<url taken from the hyperlinks above>"}
}"#;

/// Inputs of one evaluation. Immutable once built; consumed exactly once by
/// the completion call.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub resume_text: String,
    pub job_description: String,
    pub links: Vec<String>,
}

/// Renders the evaluation prompt for a request.
pub fn build_evaluation_prompt(request: &EvaluationRequest) -> String {
    let links = if request.links.is_empty() {
        "(none found)".to_string()
    } else {
        request
            .links
            .iter()
            .map(|uri| format!("- {uri}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    EVALUATION_PROMPT_TEMPLATE
        .replace("{job_description}", &request.job_description)
        .replace("{resume_text}", &request.resume_text)
        .replace("{links}", &links)
}
