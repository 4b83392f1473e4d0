use crate::RenderableReport;

/// Escape text for embedding in HTML body or attribute position.
///
/// Display names and finding messages are operator-controlled free text
/// from the remote source, so everything interpolated into the document
/// goes through here.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a self-contained HTML report document.
///
/// Deterministic given an identical report (the generation timestamp is
/// part of the report model, not read here).
pub fn render_html(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<title>Conditional Access policy report</title>\n");
    out.push_str("<style>\n");
    out.push_str(
        "body { font-family: sans-serif; margin: 2em; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         th, td { border: 1px solid #ccc; padding: 0.5em; text-align: left; vertical-align: top; }\n\
         th { background: #f0f0f0; }\n\
         .clean { color: #3a7; }\n",
    );
    out.push_str("</style>\n</head>\n<body>\n");

    out.push_str("<h1>Conditional Access policy report</h1>\n");
    out.push_str(&format!(
        "<p>Generated: {} ({} policies, {} finding(s))</p>\n",
        escape_html(&report.generated_at),
        report.policies.len(),
        report.findings_total
    ));

    out.push_str("<table>\n<tr><th>Policy</th><th>State</th><th>Findings</th></tr>\n");
    for policy in &report.policies {
        out.push_str("<tr>");
        out.push_str(&format!("<td>{}</td>", escape_html(&policy.display_name)));
        out.push_str(&format!("<td>{}</td>", escape_html(&policy.state)));
        if policy.findings.is_empty() {
            out.push_str("<td class=\"clean\">none</td>");
        } else {
            out.push_str("<td><ul>");
            for f in &policy.findings {
                out.push_str(&format!(
                    "<li>[{}] {}</li>",
                    f.severity.tag(),
                    escape_html(&f.message)
                ));
            }
            out.push_str("</ul></td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n</body>\n</html>\n");

    out
}
