//! 表示用の整形ヘルパー

use owo_colors::OwoColorize;
use tabsync::host::Snapshot;

/// 基準線上のアイテム（`#位置 タイトル [種別]`）
pub fn anchored_label(snapshot: &Snapshot) -> String {
    let title = snapshot.anchored_title.as_deref().unwrap_or("-");
    match snapshot.anchored_view_type {
        Some(tag) => format!("#{} {} [{}]", snapshot.anchored_position, title, tag),
        None => format!("#{} {}", snapshot.anchored_position, title),
    }
}

/// 選択中タブ（`タイトル (位置)`）
pub fn tab_label(snapshot: &Snapshot) -> String {
    match (snapshot.selected_tab, snapshot.selected_tab_title.as_deref()) {
        (Some(position), Some(title)) => format!("{title} ({position})"),
        (Some(position), None) => format!("({position})"),
        _ => "-".to_string(),
    }
}

pub fn position_label(position: Option<usize>) -> String {
    position.map_or_else(|| "-".to_string(), |p| p.to_string())
}

pub fn app_bar_label(expanded: Option<bool>) -> &'static str {
    match expanded {
        Some(true) => "expanded",
        Some(false) => "collapsed",
        None => "-",
    }
}

pub struct ReplaySummary {
    pub prefix: String,
    pub message: String,
}

impl ReplaySummary {
    pub fn format(actions: usize, last: &Snapshot) -> Self {
        if !last.attached {
            return Self {
                prefix: "•".yellow().to_string(),
                message: format!("{} action(s) replayed, mediator detached", actions),
            };
        }
        Self {
            prefix: "✓".green().to_string(),
            message: format!(
                "{} action(s) replayed, tab {} at {}",
                actions.green(),
                tab_label(last).bold(),
                anchored_label(last)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            attached: true,
            scroll_offset: 1000,
            anchored_position: 8,
            anchored_view_type: Some(100),
            anchored_title: Some("OTHER 0".to_string()),
            selected_tab: Some(3),
            selected_tab_title: Some("OTHER".to_string()),
            indicator: Some(3),
            strip_selection: Some(3),
            app_bar_expanded: Some(false),
            tab_click_scroll: true,
        }
    }

    #[test]
    fn test_labels() {
        let snapshot = snapshot();
        assert_eq!(anchored_label(&snapshot), "#8 OTHER 0 [100]");
        assert_eq!(tab_label(&snapshot), "OTHER (3)");
        assert_eq!(position_label(None), "-");
        assert_eq!(app_bar_label(Some(false)), "collapsed");
    }

    #[test]
    fn test_summary_for_detached_host() {
        let detached = Snapshot {
            attached: false,
            ..snapshot()
        };
        let summary = ReplaySummary::format(2, &detached);
        assert!(summary.message.contains("mediator detached"));
    }

    #[test]
    fn test_summary_names_selected_tab() {
        let summary = ReplaySummary::format(1, &snapshot());
        assert!(summary.message.contains("OTHER (3)"));
        assert!(summary.message.contains("#8"));
    }
}
