//! Server-rendered HTML for the interactive form.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag};

use crate::language::LanguageTag;

use super::strings::{UiStrings, ui_strings};

pub const DOWNLOAD_FILE_NAME: &str = "insights.txt";

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem;font-weight:600}\
input[type=text],select,textarea{width:100%;box-sizing:border-box;margin-top:.3rem}\
button{margin-top:1.5rem;padding:.6rem 1.2rem}\
.banner{padding:.8rem 1rem;border-radius:6px;margin:1rem 0}\
.warning{background:#fff4e5;border:1px solid #f0b429}\
.success{background:#e6f6ec;border:1px solid #3ba55d}\
#progress{display:none;color:#555}\
article.report{background:#f7f7f7;padding:1rem 1.5rem;border-radius:6px}\
article.report table{border-collapse:collapse}\
article.report th,article.report td{border:1px solid #ccc;padding:.3rem .6rem}\
footer{margin-top:3rem;border-top:1px solid #ddd;padding-top:1rem;color:#666}";

pub fn form_page(interface: LanguageTag) -> String {
    let t = ui_strings(interface);

    let mut body = String::new();
    body.push_str(&interface_selector(interface));
    body.push_str(&format!(
        "<h1>{}</h1>\n<p>{}</p>\n",
        escape(t.title),
        escape(t.subtitle)
    ));

    body.push_str(
        "<form method=\"post\" action=\"/ui/extract\" enctype=\"multipart/form-data\" \
         onsubmit=\"document.getElementById('progress').style.display='block'\">\n",
    );
    body.push_str(&format!(
        "<input type=\"hidden\" name=\"ui_lang\" value=\"{}\">\n",
        interface.code()
    ));

    body.push_str(&format!(
        "<label for=\"language\">{}</label>\n<select id=\"language\" name=\"language\">\n",
        escape(t.report_language)
    ));
    for language in LanguageTag::ALL {
        let selected = if language == interface { " selected" } else { "" };
        body.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            language.as_str(),
            escape(language.native_name())
        ));
    }
    body.push_str("</select>\n");

    body.push_str(&format!(
        "<label for=\"client_name\">{}</label>\n\
         <input type=\"text\" id=\"client_name\" name=\"client_name\">\n",
        escape(t.client_name)
    ));
    body.push_str(&format!(
        "<label for=\"discovery_file\">{}</label>\n\
         <input type=\"file\" id=\"discovery_file\" name=\"discovery_file\" accept=\".xlsx\">\n",
        escape(t.upload_workbook)
    ));
    body.push_str(&format!(
        "<label for=\"transcript_file\">{}</label>\n\
         <input type=\"file\" id=\"transcript_file\" name=\"transcript_file\" accept=\".txt\">\n",
        escape(t.upload_transcript)
    ));
    body.push_str(&format!(
        "<label for=\"transcript_text\">{}</label>\n\
         <textarea id=\"transcript_text\" name=\"transcript_text\" rows=\"12\"></textarea>\n",
        escape(t.paste_transcript)
    ));
    body.push_str(&format!(
        "<label for=\"notes\">{}</label>\n\
         <textarea id=\"notes\" name=\"notes\" rows=\"7\"></textarea>\n",
        escape(t.consultant_notes)
    ));

    body.push_str(&format!(
        "<button type=\"submit\">{}</button>\n",
        escape(t.extract_button)
    ));
    body.push_str(&format!(
        "<div id=\"progress\"><p>{}</p><p>{}</p><p>{}</p></div>\n</form>\n",
        escape(t.analyzing),
        escape(t.analyzing_call),
        escape(t.consolidating)
    ));

    layout(t, interface, &body)
}

/// Success banner, the report rendered from markdown and a download link
/// carrying the raw text.
pub fn result_page(interface: LanguageTag, report: &str) -> String {
    let t = ui_strings(interface);
    let body = format!(
        "<div class=\"banner success\">{}</div>\n\
         <article class=\"report\">\n{}</article>\n\
         <p><a download=\"{DOWNLOAD_FILE_NAME}\" href=\"{}\">{}</a></p>\n\
         <p><a href=\"/?lang={}\">{}</a></p>\n",
        escape(t.success),
        render_markdown(report),
        download_href(report),
        escape(t.download),
        interface.code(),
        escape(t.back),
    );
    layout(t, interface, &body)
}

/// Markdown to HTML. Raw HTML in the report is shown as text and links with
/// script schemes are neutralized.
pub fn render_markdown(report: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(report, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(report.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut out, events);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme = url.trim_start().to_ascii_lowercase();
    if ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|prefix| scheme.starts_with(prefix))
    {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

pub fn warning_page(interface: LanguageTag, message: &str) -> String {
    let t = ui_strings(interface);
    let body = format!(
        "<div class=\"banner warning\">{}</div>\n<p><a href=\"/?lang={}\">{}</a></p>\n",
        escape(message),
        interface.code(),
        escape(t.back),
    );
    layout(t, interface, &body)
}

pub fn download_href(report: &str) -> String {
    format!(
        "data:text/plain;charset=utf-8;base64,{}",
        STANDARD.encode(report.as_bytes())
    )
}

fn interface_selector(current: LanguageTag) -> String {
    let t = ui_strings(current);
    let mut html = format!(
        "<form method=\"get\" action=\"/\">\n<label for=\"lang\">{}</label>\n\
         <select id=\"lang\" name=\"lang\" onchange=\"this.form.submit()\">\n",
        escape(t.interface_language)
    );
    for language in LanguageTag::ALL {
        let selected = if language == current { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            language.code(),
            escape(language.native_name())
        ));
    }
    html.push_str("</select>\n</form>\n");
    html
}

fn layout(t: &UiStrings, interface: LanguageTag, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\
         <footer>{}</footer>\n</body>\n</html>\n",
        interface.code(),
        escape(t.page_title),
        escape(t.footer),
    )
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
