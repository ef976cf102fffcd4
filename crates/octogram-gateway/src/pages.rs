// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static HTML served by the gateway.

pub const LOGIN_SUCCESS: &str = r#"<!DOCTYPE html>
<html>
<head><title>Octogram</title></head>
<body>
<h1>GitHub login successful!</h1>
<p>You can return to Telegram and send /start to create an issue.</p>
</body>
</html>"#;

pub const SUPPORT: &str = r#"<!DOCTYPE html>
<html>
<head><title>Octogram Support</title></head>
<body>
<h1>Octogram Support</h1>
<p>Octogram files GitHub issues from Telegram. Send /login to the bot to
connect your GitHub account, then /start to create an issue.</p>
<p>For problems with the bot, open an issue on the Octogram repository.</p>
</body>
</html>"#;

pub const PRIVACY_POLICY: &str = r#"<!DOCTYPE html>
<html>
<head><title>Octogram Privacy Policy</title></head>
<body>
<h1>Privacy Policy</h1>
<p>Octogram stores your Telegram user id together with the GitHub access
token you grant during login. The token is used only to list your accounts
and repositories and to create issues you ask for. Nothing else is stored,
and no data is shared with third parties.</p>
</body>
</html>"#;
