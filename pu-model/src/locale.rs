//! User-facing copy for the site, in Chinese (default) or English.

use serde::{Deserialize, Serialize};

/// Display language of the page chrome. Paper metadata is shown as written.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

/// Every string the apps put on screen.
#[derive(Debug, PartialEq, Eq)]
pub struct UiText {
    pub authors: &'static str,
    pub year: &'static str,
    pub source: &'static str,
    pub read_online: &'static str,
    pub download_pdf: &'static str,
    pub filter_all: &'static str,
    pub filter_chinese: &'static str,
    pub filter_english: &'static str,
    pub loading_papers: &'static str,
    pub loading_chart: &'static str,
    /// Shown in place of the paper list when loading fails
    pub papers_error: &'static str,
    /// Shown in place of each chart when loading fails
    pub charts_error: &'static str,
    pub chart_failed: &'static str,
    pub age_chart_title: &'static str,
    pub age_chart_caption: &'static str,
    pub age_axis: &'static str,
    pub intervention_chart_title: &'static str,
    pub intervention_chart_caption: &'static str,
    pub intervention_axis: &'static str,
    pub incidence_axis: &'static str,
}

static ZH: UiText = UiText {
    authors: "作者:",
    year: "年份:",
    source: "来源:",
    read_online: "在线阅读",
    download_pdf: "下载PDF",
    filter_all: "全部论文",
    filter_chinese: "中文文献",
    filter_english: "英文文献",
    loading_papers: "正在加载论文...",
    loading_chart: "正在加载图表...",
    papers_error: "论文数据加载失败，请刷新页面重试。",
    charts_error: "图表数据加载失败，请刷新页面重试。",
    chart_failed: "📊 图表加载失败",
    age_chart_title: "老年患者压疮发生率随年龄变化趋势",
    age_chart_caption: "各年龄组压疮发生率 (%)",
    age_axis: "年龄分组",
    intervention_chart_title: "不同干预措施对压疮发生率的影响",
    intervention_chart_caption: "干预前后压疮发生率 (%)",
    intervention_axis: "干预措施类型",
    incidence_axis: "压疮发生率 (%)",
};

static EN: UiText = UiText {
    authors: "Authors:",
    year: "Year:",
    source: "Source:",
    read_online: "Read online",
    download_pdf: "Download PDF",
    filter_all: "All Papers",
    filter_chinese: "Chinese",
    filter_english: "English",
    loading_papers: "Loading papers...",
    loading_chart: "Loading chart...",
    papers_error: "Failed to load paper data. Please refresh the page and try again.",
    charts_error: "Failed to load chart data. Please refresh the page and try again.",
    chart_failed: "📊 Chart failed to load",
    age_chart_title: "Pressure Ulcer Incidence in Elderly Patients by Age",
    age_chart_caption: "Incidence (%) per age group",
    age_axis: "Age group",
    intervention_chart_title: "Effect of Interventions on Pressure Ulcer Incidence",
    intervention_chart_caption: "Incidence (%) under each intervention",
    intervention_axis: "Intervention type",
    incidence_axis: "Pressure ulcer incidence (%)",
};

impl Locale {
    pub fn text(&self) -> &'static UiText {
        match self {
            Locale::Zh => &ZH,
            Locale::En => &EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chinese() {
        assert_eq!(Locale::default(), Locale::Zh);
        assert_eq!(Locale::default().text().read_online, "在线阅读");
        assert_eq!(Locale::default().text().download_pdf, "下载PDF");
    }

    #[test]
    fn test_locale_tags() {
        assert_eq!(serde_json::from_str::<Locale>(r#""en""#).unwrap(), Locale::En);
        assert_eq!(serde_json::to_string(&Locale::Zh).unwrap(), r#""zh""#);
        assert!(serde_json::from_str::<Locale>(r#""fr""#).is_err());
    }

    #[test]
    fn test_errors_differ_per_module() {
        for locale in [Locale::Zh, Locale::En] {
            let text = locale.text();
            assert_ne!(text.papers_error, text.charts_error);
        }
    }
}
