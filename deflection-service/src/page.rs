//! Server-rendered calculator page

use dioxus::prelude::*;

use deflection_solver::report::DeflectionReport;

use crate::models::CalculatorForm;

const TITLE: &str = "Beam Deflection Calculator";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; color: #222; }
.row { display: flex; gap: 2rem; align-items: flex-start; }
.inputs { flex: 1; display: flex; flex-direction: column; gap: 0.75rem; }
.outputs { flex: 2; display: flex; flex-direction: column; gap: 0.75rem; }
label { display: flex; flex-direction: column; font-size: 0.9rem; gap: 0.25rem; }
fieldset { border: 1px solid #ccc; }
textarea { font-family: monospace; width: 100%; }
button { padding: 0.5rem 1rem; font-size: 1rem; }";

/// What the two output boxes show
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutput {
    /// Nothing computed yet
    Empty,
    Report(DeflectionReport),
    Error(String),
}

impl FormOutput {
    fn boxes(&self) -> (String, String) {
        match self {
            FormOutput::Empty => (String::new(), String::new()),
            FormOutput::Report(report) => (report.summary.clone(), report.table.clone()),
            FormOutput::Error(message) => (message.clone(), String::new()),
        }
    }
}

pub struct PageRenderer;

impl PageRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole page with the form filled from `form`
    pub fn render(&self, form: &CalculatorForm, output: &FormOutput) -> String {
        let page = dioxus_ssr::render_element(rsx! {
            CalculatorPage { form: form.clone(), output: output.clone() }
        });
        format!("<!DOCTYPE html>\n{}", page)
    }
}

#[component]
fn CalculatorPage(form: CalculatorForm, output: FormOutput) -> Element {
    let (summary, table) = output.boxes();

    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                title { "{TITLE}" }
                style { "{STYLE}" }
            }
            body {
                h2 { "{TITLE}" }
                div { class: "row",
                    form {
                        class: "inputs",
                        method: "post",
                        action: "/compute",

                        NumberInput { name: "length", label: "Beam Length L (m)", value: form.length.clone() }
                        LoadTypeInput { selected: form.load_type.clone() }
                        NumberInput {
                            name: "load_value",
                            label: "Load: P (N) for point / w (N/m) for UDL",
                            value: form.load_value.clone(),
                        }
                        NumberInput {
                            name: "youngs_modulus",
                            label: "Young's Modulus E (Pa)",
                            value: form.youngs_modulus.clone(),
                        }
                        NumberInput {
                            name: "moment_of_inertia",
                            label: "Moment of Inertia I (m^4)",
                            value: form.moment_of_inertia.clone(),
                        }
                        button { r#type: "submit", "Compute Deflection" }
                    }
                    div { class: "outputs",
                        TextOutput { id: "summary", label: "Maximum Deflection", rows: 1, text: summary }
                        TextOutput { id: "table", label: "Deflection Curve (x vs y)", rows: 20, text: table }
                    }
                }
            }
        }
    }
}

#[component]
fn NumberInput(name: &'static str, label: &'static str, value: String) -> Element {
    rsx! {
        label {
            "{label}"
            input { r#type: "text", name: "{name}", value: "{value}" }
        }
    }
}

#[component]
fn LoadTypeInput(selected: String) -> Element {
    let udl = selected.trim().eq_ignore_ascii_case("udl");

    rsx! {
        fieldset {
            legend { "Load Type" }
            for (value, checked) in [("point", !udl), ("udl", udl)] {
                label { key: "{value}",
                    input { r#type: "radio", name: "load_type", value: "{value}", checked }
                    "{value}"
                }
            }
        }
    }
}

#[component]
fn TextOutput(id: &'static str, label: &'static str, rows: u32, text: String) -> Element {
    rsx! {
        label { r#for: "{id}", "{label}" }
        textarea { id: "{id}", rows: "{rows}", readonly: true, "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The opening tag of the first `<input>` carrying `attr`
    fn input_tag<'a>(html: &'a str, attr: &str) -> &'a str {
        let at = html.find(attr).expect("attribute not rendered");
        let start = html[..at].rfind("<input").expect("not inside an input");
        let end = at + html[at..].find('>').expect("unterminated tag");
        &html[start..=end]
    }

    #[test]
    fn test_initial_page() {
        let html = PageRenderer::new().render(&CalculatorForm::initial(), &FormOutput::Empty);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h2>Beam Deflection Calculator</h2>"));
        assert!(input_tag(&html, "name=\"youngs_modulus\"").contains("value=\"2.1e11\""));
        assert!(input_tag(&html, "value=\"point\"").contains("checked"));
        assert!(html.contains("Compute Deflection"));
    }

    #[test]
    fn test_error_goes_in_summary_box() {
        let mut form = CalculatorForm::initial();
        form.load_type = "udl".to_string();
        let html = PageRenderer::new().render(&form, &FormOutput::Error("bad <input>".into()));
        assert!(html.contains("bad &lt;input&gt;</textarea>"));
        assert!(!html.contains("bad <input>"));
        assert!(input_tag(&html, "value=\"udl\"").contains("checked"));
    }

    #[test]
    fn test_submitted_values_are_escaped() {
        let mut form = CalculatorForm::initial();
        form.length = "\"><script>".to_string();
        let html = PageRenderer::new().render(&form, &FormOutput::Empty);
        assert!(!html.contains("<script>"));
    }
}
