//! Placeholder site content

/// Fixed landing page uploaded as `index.html` until real content
/// replaces it.
pub fn placeholder_html(domain: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Welcome to {domain}</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}
        .header {{ text-align: center; margin-bottom: 40px; }}
        .content {{ line-height: 1.6; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Welcome to {domain}</h1>
        <p>Your site is live.</p>
    </div>
    <div class="content">
        <h2>Setup Complete</h2>
        <p>This site is served with:</p>
        <ul>
            <li>Versioned object storage for static content</li>
            <li>A content-delivery network in front of the bucket</li>
            <li>A TLS certificate for HTTPS</li>
            <li>DNS alias records for the apex and www domains</li>
        </ul>
        <p>Upload your own content to replace this page.</p>
    </div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_names_the_domain() {
        let html = placeholder_html("example.com");
        assert!(html.contains("<title>Welcome to example.com</title>"));
        assert!(html.contains("<h1>Welcome to example.com</h1>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
