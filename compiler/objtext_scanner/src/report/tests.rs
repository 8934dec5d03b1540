use pretty_assertions::assert_eq;

use super::*;
use crate::driver::scan_values;
use crate::scanner::BareStringScanner;

fn reports(source: &SourceBuffer) -> Vec<ValueReport> {
    scan_values(&BareStringScanner::new(), source)
}

#[test]
fn format_accepted_and_declined() {
    let buf = SourceBuffer::new("a = some text\nb = 12\n");
    let lines: Vec<_> = reports(&buf)
        .iter()
        .map(|r| format_report(&buf, r))
        .collect();
    assert_eq!(
        lines,
        vec![
            "     1:5  bare_string \"some text\"".to_owned(),
            "     2:5  declined (number)".to_owned(),
        ]
    );
}

#[test]
fn malformed_value_renders_warning() {
    let buf = SourceBuffer::new("a = \"open\n");
    let all = reports(&buf);
    assert_eq!(all.len(), 1);

    let mut out = Vec::new();
    let written = render_malformed("part.rules", &buf, &all[0], false, &mut out);
    assert!(written.is_ok());
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("value cannot be read as a bare string"), "{text}");
    assert!(text.contains("unterminated string"), "{text}");
    assert!(text.contains("part.rules"), "{text}");
}

#[test]
fn non_malformed_values_render_nothing() {
    let buf = SourceBuffer::new("a = fine text\nb = 3\n");
    for report in reports(&buf) {
        let mut out = Vec::new();
        assert!(render_malformed("x", &buf, &report, false, &mut out).is_ok());
        assert!(out.is_empty());
    }
}

#[test]
fn malformed_at_end_of_input() {
    let buf = SourceBuffer::new("a = @");
    let all = reports(&buf);
    let mut out = Vec::new();
    assert!(render_malformed("x", &buf, &all[0], false, &mut out).is_ok());
    assert!(String::from_utf8_lossy(&out).contains("verbatim"));
}
