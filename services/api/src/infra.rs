use dhara::assessment::QuizAnswer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse a `question:option` pair such as `2:1`.
pub(crate) fn parse_answer(raw: &str) -> Result<QuizAnswer, String> {
    let (question, option) = raw
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("expected QUESTION:OPTION, found '{raw}'"))?;

    let index = |value: &str, what: &str| {
        value
            .trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid {what} index '{value}' in '{raw}' ({err})"))
    };

    Ok(QuizAnswer(index(question, "question")?, index(option, "option")?))
}
