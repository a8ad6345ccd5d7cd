//! Ballot page rendering.
//!
//! The ballot is a single self-contained HTML document: one checkbox per
//! candidate plus an embedded client-side guard that enforces the vote
//! limit, asks for confirmation, and blocks the UI while a submission is
//! in flight. The guard is advisory only; the server-side checks in
//! [`crate::vote`] remain the source of truth.

use std::fmt::Write;

use super::candidate::Roster;

/// Document shell up to the candidate checkboxes. `{max_votes}` is
/// substituted before serving.
const PAGE_PREFIX: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Vote counter</title>
<style>
#disable_ui {
    display: none;
    z-index: 1000;
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background-color: white;
    opacity: .5;
}
</style>
</head>
<body>
<div id="disable_ui"></div>
<script>
"use strict";
const MAX_VOTES = {max_votes};
let msgTimer = null;

function setMsg(text, color) {
    if (msgTimer) {
        clearTimeout(msgTimer);
        msgTimer = null;
    }
    if (text) {
        msgTimer = setTimeout(clearMsg, 5000);
    }
    const msg = document.getElementById("messages");
    msg.style.color = color;
    msg.textContent = text;
}
function setMsgErr(text) { setMsg("ERROR: " + text, "red"); }
function setMsgWarn(text) { setMsg("WARNING: " + text, "orange"); }
function setMsgOk(text) { setMsg(text, "green"); }
function clearMsg() { setMsg("", "black"); }

function voteBoxes() {
    return document.getElementById("frm_votes")
        .querySelectorAll("input[type=checkbox]");
}
function checkedBoxes() {
    return document.getElementById("frm_votes")
        .querySelectorAll("input[type=checkbox]:checked");
}
function resetVotes() {
    for (const box of voteBoxes()) {
        box.checked = false;
    }
}
function resetAll() {
    resetVotes();
    clearMsg();
}
function disableUi() {
    document.getElementById("disable_ui").style.display = "block";
}
function enableUi() {
    document.getElementById("disable_ui").style.display = "none";
}

async function submitVotes() {
    const checked = checkedBoxes();
    if (checked.length > MAX_VOTES) {
        setMsgErr("max " + MAX_VOTES + " votes!");
        return;
    }

    let msg = "";
    if (checked.length < MAX_VOTES) {
        msg += "Note: That's fewer than " + MAX_VOTES + " votes.\n";
    }
    msg += "Submit votes?";
    if (!confirm(msg)) {
        setMsgWarn("User cancelled vote; try again.");
        return;
    }

    setMsgWarn("Submitting vote...");
    disableUi();

    const body = new URLSearchParams();
    for (const box of checked) {
        body.append(box.name, "on");
    }
    try {
        const resp = await fetch("/vote", { method: "POST", body: body });
        if (resp.ok) {
            setMsgOk("Vote accepted.");
            resetVotes();
        } else {
            setMsgErr(await resp.text() || "Vote request failed.");
        }
    } catch (e) {
        setMsgErr("Vote request failed.");
    } finally {
        enableUi();
    }
}
</script>
<h1>Choose up to {max_votes} people:</h1>
<form id="frm_votes" method="POST" action="/vote">
"#;

const PAGE_SUFFIX: &str = r#"</form>
<button id="btn_vote" onclick="submitVotes()">Vote!</button>
<button id="btn_reset" onclick="resetAll()">Reset</button>
<h2 id="messages"></h2>
</body>
</html>
"#;

/// Renders the complete ballot document for the given roster.
///
/// Identifiers go into the markup verbatim (they are restricted to
/// alphanumerics plus the separator), display names are escaped.
pub fn render_ballot(max_votes: usize, roster: &Roster) -> String {
    let mut page = PAGE_PREFIX.replace("{max_votes}", &max_votes.to_string());
    for candidate in roster.candidates() {
        // write! into a String cannot fail.
        let _ = writeln!(
            page,
            r#"<label><input type="checkbox" name="{}"> {}</label><br>"#,
            candidate.ident,
            escape_html(&candidate.name),
        );
    }
    page.push_str(PAGE_SUFFIX);
    page
}

/// Escapes a display name for embedding in HTML text and attribute
/// positions.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
