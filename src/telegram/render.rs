//! Reply rendering in Telegram HTML.

use maud::{Markup, Render, html};
use url::Url;

use crate::{amap::driving::Path, bot::resolve::Endpoint, math};

pub fn start() -> Markup {
    html! {
        "👋 你好！我可以帮你查询位置信息："
        "\n\n"
        "/so <关键词> — 查询常用位置附近的地点"
        "\n"
        "/go <终点> 或 /go <起点> to <终点> — 查询距离和预计时间"
        "\n"
        "/dd <终点> 或 /dd <起点> to <终点> — 查询路况"
        "\n"
        "/setlocation <位置> — 设置常用位置"
    }
}

/// Plain text, HTML-escaped by maud.
pub fn plain(text: &str) -> Markup {
    html! { (text) }
}

pub fn unknown_command() -> Markup {
    html! { "🤔 我不认识这个命令，发送 /help 查看用法。" }
}

/// `/so` reply: header plus the summary text.
pub fn nearby(keyword: &str, summary: &str) -> Markup {
    html! {
        "附近的 " strong { (keyword) } " 信息："
        "\n"
        (summary)
    }
}

/// `/go` reply with the presentation-level unit conversion: meters to
/// kilometers with two decimals, seconds to whole minutes.
pub fn route(origin: &Endpoint, destination: &Endpoint, path: &Path) -> Markup {
    html! {
        (origin) " 到 " (destination) " 的距离是 "
        strong { (math::kilometers(path.distance)) " 公里" }
        "，预计时间 "
        strong { (math::minutes(path.duration)) " 分钟" }
        "。"
    }
}

/// `/dd` reply: header plus the summary text.
pub fn traffic(origin: &Endpoint, destination: &Endpoint, summary: &str) -> Markup {
    html! {
        (origin) " 到 " (destination) " 的路况信息："
        "\n"
        (summary)
    }
}

/// `/setlocation` confirmation.
pub fn location_set(location: &Endpoint) -> Markup {
    html! { "✅ 常用位置已设置为 " (location) "。" }
}

pub fn nothing_nearby(keyword: &str) -> Markup {
    html! { "附近没有找到「" (keyword) "」相关的地点。" }
}

/// A named place linked to its marker on the Amap site.
impl Render for Endpoint {
    fn render(&self) -> Markup {
        let url = Url::parse_with_params(
            "https://uri.amap.com/marker",
            &[("position", self.coordinate.as_str()), ("name", self.name.as_str())],
        );
        html! {
            @match url {
                Ok(url) => strong { a href=(url) { (self.name) } },
                Err(_) => strong { (self.name) },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amap::Coordinate;

    #[test]
    fn route_reply_converts_units() {
        let origin =
            Endpoint { name: "家".to_string(), coordinate: Coordinate::new("116.48,39.99") };
        let destination =
            Endpoint { name: "天安门".to_string(), coordinate: Coordinate::new("116.39,39.91") };
        let path: Path = serde_json::from_value(serde_json::json!({
            "distance": "12345",
            "duration": "1800"
        }))
        .unwrap();

        let rendered = route(&origin, &destination, &path).into_string();
        assert!(rendered.contains("12.35 公里"));
        assert!(rendered.contains("30 分钟"));
        assert!(rendered.contains(r#"href="https://uri.amap.com/marker"#));
    }
}
