//! HTML rendering for the post pages.
//!
//! Every piece of post text goes through [`escape`] before it is written
//! into markup.

use crate::model::Post;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn document(page_title: &str, body: &str) -> String {
    format!("<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{}</title>\n\
             <link rel=\"stylesheet\" href=\"/static/main.css\">\n\
             </head>\n\
             <body>\n\
             <nav><a href=\"/\">Home</a> <a href=\"/about\">About</a></nav>\n\
             <main>\n{}</main>\n\
             </body>\n\
             </html>\n",
            escape(page_title),
            body)
}

/// Full page listing every post in the given order.
pub fn post_list_page(page_title: &str, posts: &[Post]) -> String {
    let mut body = String::new();
    for post in posts {
        body.push_str(&format!("<article id=\"post-{}\">\n\
                                <h2>{}</h2>\n\
                                <p class=\"meta\">By {} on {}</p>\n\
                                <p>{}</p>\n\
                                </article>\n",
                               post.id(),
                               escape(post.title()),
                               escape(post.author()),
                               escape(post.date_posted()),
                               escape(post.content())));
    }
    document(page_title, &body)
}

pub fn headline(post: &Post) -> String {
    format!("<h1>{}</h1>", escape(post.title()))
}

pub fn about_page() -> String {
    document("About",
             "<h1>About</h1>\n<p>A small blog serving a fixed set of posts.</p>\n")
}
