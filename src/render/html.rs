//! HTML document assembly
//!
//! The renderer is a pure function from an assembled `RenderContext` to the
//! final document text. Table cells arrive pre-formatted (they carry their
//! own markup); everything else is escaped here.

use crate::core::metadata::ProjectMetadata;
use crate::render::rows::table_headers;
use crate::utils::escape_html;

/// One suite's section of the document: its name and its formatted rows
#[derive(Debug, Clone)]
pub struct SuiteSection {
  pub name: String,
  pub rows: Vec<Vec<String>>,
}

/// Everything the renderer needs, assembled once per run
#[derive(Debug)]
pub struct RenderContext<'a> {
  pub metadata: &'a ProjectMetadata,
  /// Suites in command-line argument order
  pub suites: Vec<SuiteSection>,
}

/// Render the full specification document
pub fn render_document(ctx: &RenderContext<'_>) -> String {
  let mut out = String::new();
  let meta = ctx.metadata;

  out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
  out.push_str("<meta charset=\"utf-8\"/>\n");
  out.push_str(&format!(
    "<title>{}: compliance check specification</title>\n",
    escape_html(&meta.label)
  ));
  out.push_str(
    "<style>\n\
     table { border-collapse: collapse; margin-bottom: 2em; }\n\
     th, td { border: 1px solid #999; padding: 0.4em 0.8em; vertical-align: top; }\n\
     th { background: #eee; }\n\
     </style>\n",
  );
  out.push_str("</head>\n<body>\n");

  out.push_str(&format!("<h1>{}</h1>\n", escape_html(&meta.label)));
  out.push_str(&format!("<p>{}</p>\n", escape_html(&meta.description)));

  out.push_str("<ul class=\"project-metadata\">\n");
  push_meta_item(&mut out, "Canonical name", &meta.canonical_name);
  push_meta_item(&mut out, "Vocabulary authority", &meta.vocab_authority);
  push_meta_item(&mut out, "Vocabulary scope", &meta.vocab_scope);
  push_meta_item(&mut out, "Checks version", &meta.checks_version);
  if let Some(url) = &meta.url {
    out.push_str(&format!(
      "<li>Project page: <a href='{url}'>{url}</a></li>\n",
      url = escape_html(url)
    ));
  }
  out.push_str("</ul>\n");

  for suite in &ctx.suites {
    out.push_str(&format!("<h2>{}</h2>\n", escape_html(&suite.name)));
    push_suite_table(&mut out, suite);
  }

  out.push_str("</body>\n</html>\n");
  out
}

fn push_meta_item(out: &mut String, label: &str, value: &str) {
  out.push_str(&format!("<li>{}: {}</li>\n", label, escape_html(value)));
}

fn push_suite_table(out: &mut String, suite: &SuiteSection) {
  out.push_str("<table>\n<thead>\n<tr>");
  for header in table_headers() {
    out.push_str(&format!("<th>{}</th>", escape_html(header)));
  }
  out.push_str("</tr>\n</thead>\n<tbody>\n");

  for row in &suite.rows {
    out.push_str("<tr>");
    for cell in row {
      // Cells are pre-formatted HTML from the row formatter
      out.push_str(&format!("<td>{}</td>", cell));
    }
    out.push_str("</tr>\n");
  }

  out.push_str("</tbody>\n</table>\n");
}
