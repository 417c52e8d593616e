//! Turns structured map results into reply text, optionally via the LLM.

use crate::{
    amap::{driving::Path, place::Poi},
    llm::Llm,
    math,
    prelude::*,
};

const SESSION_ID: &str = "location_summary";

/// Structured data handed to the summarizer.
#[must_use]
pub enum SummaryInput<'a> {
    Pois(&'a [Poi]),
    Route(&'a Path),
}

impl SummaryInput<'_> {
    /// Deterministic plain-text rendering.
    ///
    /// Doubles as the LLM prompt body and as the fallback reply, so it never
    /// drops information: every POI keeps its name, address and distance.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Pois(pois) => pois.iter().map(render_poi).collect::<Vec<_>>().join("\n"),
            Self::Route(path) => render_route(path),
        }
    }
}

fn render_poi(poi: &Poi) -> String {
    let mut line = poi.name.clone();
    if !poi.address.is_empty() {
        line.push_str(&format!(" - {}", poi.address));
    }
    if let Some(distance) = poi.distance {
        line.push_str(&format!("（距离 {distance} 米）"));
    }
    line
}

fn render_route(path: &Path) -> String {
    let mut text = format!(
        "全程 {} 公里，预计 {} 分钟",
        math::kilometers(path.distance),
        math::minutes(path.duration),
    );
    if let Some(traffic_lights) = path.traffic_lights {
        text.push_str(&format!("，红绿灯约 {traffic_lights} 个"));
    }
    text.push('。');
    for (index, step) in path.steps.iter().enumerate() {
        text.push_str(&format!("\n{}. {}", index + 1, step.instruction));
        if let Some(status) = step.traffic_status() {
            text.push_str(&format!("【{status}】"));
        }
    }
    text
}

/// Response summarizer with an optional LLM provider.
#[must_use]
pub struct Summarizer(Option<Llm>);

impl Summarizer {
    pub const fn new(llm: Option<Llm>) -> Self {
        Self(llm)
    }

    /// Summarize the data with the LLM, or fall back to the plain rendering
    /// when no provider is configured.
    ///
    /// A failed LLM call is an error. An absent provider is not.
    pub async fn summarize(&self, input: &SummaryInput<'_>) -> Result<String> {
        let rendered = input.render();
        match &self.0 {
            Some(llm) => {
                let prompt = format!("请根据以下信息生成一个简洁的总结：\n{rendered}");
                llm.text_chat(&prompt, SESSION_ID).await
            }
            None => Ok(rendered),
        }
    }
}
