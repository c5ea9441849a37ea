#![allow(dead_code)]

/// Builds a `<table class="wikitable">` with one header row and the given data rows.
pub fn wikitable(header: &[&str], rows: &[&[&str]]) -> String {
    let mut html = String::from("<table class=\"wikitable\">\n<tr>");
    for cell in header {
        html.push_str(&format!("<th>{cell}</th>"));
    }
    html.push_str("</tr>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in *row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

/// Wraps table markup in a minimal page with some unrelated content.
pub fn page(tables: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>fixture</title></head><body>\
         <p>intro</p>\n{}<p>outro</p></body></html>",
        tables.concat()
    )
}

/// Three small wikitables named "first", "second" and "third".
pub fn three_tables() -> String {
    page(&[
        wikitable(&["first", "n"], &[&["a", "1"]]),
        wikitable(&["second", "n"], &[&["b", "2"]]),
        wikitable(&["third", "n"], &[&["c", "3"]]),
    ])
}
