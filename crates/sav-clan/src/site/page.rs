//! Server-side renderer for the single marketing page.

use std::fmt::Write as _;

use crate::recruitment::RankTier;

use super::content::{
    placeholder_image, CLAN_NAME, CONTENT_TERMS_DETAIL, HERO_CTA, HERO_TAGLINE, NAV_LINKS,
    REGISTRATION_INTRO, REGISTRATION_TITLE, SOCIAL_LINKS,
};

/// Render the whole document. `year` feeds the footer copyright line so the
/// renderer itself stays clock-free and deterministic.
pub fn render_page(year: i32) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(html, "<title>{} — Join the Clan</title>", escape_html(CLAN_NAME))
        .expect("write title");
    html.push_str("<link rel=\"stylesheet\" href=\"/assets/style.css\">\n");
    html.push_str("</head>\n<body>\n");

    render_header(&mut html);
    html.push_str("<main>\n");
    render_hero(&mut html);
    render_registration(&mut html);
    html.push_str("</main>\n");
    render_footer(&mut html, year);

    html.push_str("<script>\n");
    html.push_str(BEHAVIOR_SCRIPT);
    html.push_str("\n</script>\n</body>\n</html>\n");
    html
}

fn render_header(html: &mut String) {
    html.push_str("<header id=\"site-header\">\n<div class=\"container header-row\">\n");
    writeln!(
        html,
        "<a class=\"brand\" href=\"#\">{}</a>",
        escape_html(CLAN_NAME)
    )
    .expect("write brand");

    html.push_str("<nav class=\"desktop-nav\">\n");
    for link in NAV_LINKS {
        writeln!(
            html,
            "<a href=\"{}\">{}</a>",
            escape_html(link.href),
            escape_html(link.name)
        )
        .expect("write nav link");
    }
    html.push_str("</nav>\n");

    html.push_str(
        "<button id=\"menu-toggle\" aria-label=\"Open menu\">&#9776;</button>\n</div>\n",
    );

    html.push_str("<nav id=\"drawer\">\n");
    for link in NAV_LINKS {
        writeln!(
            html,
            "<a href=\"{}\">{}</a>",
            escape_html(link.href),
            escape_html(link.name)
        )
        .expect("write drawer link");
    }
    html.push_str("</nav>\n</header>\n");
}

fn render_hero(html: &mut String) {
    html.push_str("<section class=\"hero\">\n");
    if let Some(image) = placeholder_image("hero-background") {
        writeln!(
            html,
            "<img class=\"hero-image\" src=\"{}\" alt=\"{}\" data-hint=\"{}\">",
            escape_html(image.image_url),
            escape_html(image.description),
            escape_html(image.image_hint)
        )
        .expect("write hero image");
    }
    html.push_str("<div class=\"hero-overlay\"></div>\n<div class=\"hero-content\">\n");
    writeln!(html, "<h1>{}</h1>", escape_html(CLAN_NAME)).expect("write hero title");
    writeln!(html, "<p>{}</p>", escape_html(HERO_TAGLINE)).expect("write hero tagline");
    writeln!(
        html,
        "<a class=\"button\" href=\"#register\">{} &rarr;</a>",
        escape_html(HERO_CTA)
    )
    .expect("write hero cta");
    html.push_str("</div>\n</section>\n");
}

fn render_registration(html: &mut String) {
    html.push_str("<section id=\"register\">\n<div class=\"container\">\n<div class=\"card\">\n");
    writeln!(html, "<h2>{}</h2>", escape_html(REGISTRATION_TITLE)).expect("write form title");
    writeln!(html, "<p class=\"intro\">{}</p>", escape_html(REGISTRATION_INTRO))
        .expect("write form intro");

    html.push_str("<form id=\"application-form\" novalidate>\n<div class=\"field-grid\">\n");
    text_field(html, "in_game_name", "In-Game Name", "Your BloodStrike name");
    text_field(html, "player_id", "Player ID", "Your player ID");
    text_field(html, "age", "Age", "18");
    html.push_str("</div>\n<div class=\"field-grid four\">\n");
    text_field(html, "level", "Level", "50");
    rank_field(html);
    text_field(html, "kd_battle_royale", "K/D (BR)", "3.0");
    text_field(html, "kd_battle_escalation", "K/D (BE)", "2.5");
    html.push_str("</div>\n");

    html.push_str("<div class=\"field\">\n<label for=\"message\">Message (optional)</label>\n");
    html.push_str(
        "<textarea id=\"message\" name=\"message\" rows=\"4\" \
         placeholder=\"Tell us about your competitive experience, preferred roles, etc.\"></textarea>\n",
    );
    error_slot(html, "message");
    html.push_str("</div>\n");

    checkbox_field(html, "has_whatsapp", "I confirm I have WhatsApp.", None);
    checkbox_field(
        html,
        "is_available",
        "I confirm I have time available to play.",
        None,
    );
    checkbox_field(
        html,
        "accepts_content_terms",
        "I accept the Terms and Conditions on content creation.",
        Some(CONTENT_TERMS_DETAIL),
    );

    html.push_str("<button type=\"submit\" class=\"button wide\">Send Application</button>\n</form>\n");

    html.push_str("<div id=\"result-card\" class=\"result hidden\">\n");
    html.push_str("<div class=\"check-mark\">&#10003;</div>\n");
    html.push_str("<h3>Application submitted!</h3>\n<p id=\"result-message\"></p>\n");
    html.push_str(
        "<button id=\"send-to-group\" class=\"button\">Send the form to the group</button>\n",
    );
    html.push_str(
        "<p class=\"small-print\">Clicking copies your data and opens WhatsApp. \
         Just paste the message into the group chat.</p>\n</div>\n",
    );

    html.push_str("</div>\n</div>\n</section>\n");
}

fn render_footer(html: &mut String, year: i32) {
    html.push_str("<footer>\n<div class=\"container footer-col\">\n<div class=\"social-row\">\n");
    for link in SOCIAL_LINKS {
        writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{}</a>",
            escape_html(link.href),
            escape_html(link.aria_label),
            escape_html(link.name)
        )
        .expect("write social link");
    }
    html.push_str("</div>\n");
    writeln!(
        html,
        "<p>&copy; {year} {}. All rights reserved.</p>",
        escape_html(CLAN_NAME)
    )
    .expect("write copyright");
    html.push_str("</div>\n</footer>\n");
}

fn text_field(html: &mut String, name: &str, label: &str, placeholder: &str) {
    writeln!(
        html,
        "<div class=\"field\">\n<label for=\"{name}\">{}</label>\n\
         <input id=\"{name}\" name=\"{name}\" type=\"text\" placeholder=\"{}\">",
        escape_html(label),
        escape_html(placeholder)
    )
    .expect("write text field");
    error_slot(html, name);
    html.push_str("</div>\n");
}

fn rank_field(html: &mut String) {
    html.push_str(
        "<div class=\"field\">\n<label for=\"rank\">Rank</label>\n<select id=\"rank\" name=\"rank\">\n",
    );
    html.push_str("<option value=\"\">Select your rank</option>\n");
    for tier in RankTier::ALL.iter().rev() {
        writeln!(
            html,
            "<option value=\"{}\">{}</option>",
            tier.slug(),
            escape_html(tier.label())
        )
        .expect("write rank option");
    }
    html.push_str("</select>\n");
    error_slot(html, "rank");
    html.push_str("</div>\n");
}

fn checkbox_field(html: &mut String, name: &str, label: &str, detail: Option<&str>) {
    writeln!(
        html,
        "<div class=\"check-row\">\n<input id=\"{name}\" name=\"{name}\" type=\"checkbox\">\n\
         <div>\n<label for=\"{name}\">{}</label>",
        escape_html(label)
    )
    .expect("write checkbox");
    if let Some(detail) = detail {
        writeln!(html, "<p class=\"detail\">{}</p>", escape_html(detail)).expect("write detail");
    }
    error_slot(html, name);
    html.push_str("</div>\n</div>\n");
}

fn error_slot(html: &mut String, name: &str) {
    writeln!(html, "<p class=\"field-error\" data-error-for=\"{name}\"></p>")
        .expect("write error slot");
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// Scroll shadow, drawer, submit-to-API, and the clipboard-then-open hand-off.
const BEHAVIOR_SCRIPT: &str = r#"(function () {
  const header = document.getElementById('site-header');
  const onScroll = () => header.classList.toggle('scrolled', window.scrollY > 10);
  window.addEventListener('scroll', onScroll);
  onScroll();

  const toggle = document.getElementById('menu-toggle');
  const drawer = document.getElementById('drawer');
  toggle.addEventListener('click', () => drawer.classList.toggle('open'));
  drawer.querySelectorAll('a').forEach((link) =>
    link.addEventListener('click', () => drawer.classList.remove('open')));

  const form = document.getElementById('application-form');
  const resultCard = document.getElementById('result-card');
  const sendButton = document.getElementById('send-to-group');
  let handoff = null;

  function toast(title, detail, failed) {
    const node = document.createElement('div');
    node.className = failed ? 'toast toast-error' : 'toast';
    node.textContent = title + ' ' + detail;
    document.body.appendChild(node);
    setTimeout(() => node.remove(), 6000);
  }

  function clearErrors() {
    form.querySelectorAll('.field-error').forEach((slot) => { slot.textContent = ''; });
  }

  form.addEventListener('submit', async (event) => {
    event.preventDefault();
    clearErrors();
    const data = new FormData(form);
    const payload = {
      in_game_name: data.get('in_game_name') || '',
      player_id: data.get('player_id') || '',
      level: data.get('level') || '',
      rank: data.get('rank') || null,
      kd_battle_royale: data.get('kd_battle_royale') || '',
      kd_battle_escalation: data.get('kd_battle_escalation') || '',
      age: data.get('age') || '',
      has_whatsapp: data.get('has_whatsapp') === 'on',
      is_available: data.get('is_available') === 'on',
      accepts_content_terms: data.get('accepts_content_terms') === 'on',
      message: data.get('message') || ''
    };
    const response = await fetch('/api/v1/recruitment/applications', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    });
    if (response.status === 422) {
      const body = await response.json();
      Object.entries(body.errors || {}).forEach(([field, message]) => {
        const slot = form.querySelector('[data-error-for="' + field + '"]');
        if (slot) slot.textContent = message;
      });
      return;
    }
    if (!response.ok) {
      toast('Something went wrong.', 'Please try again.', true);
      return;
    }
    const body = await response.json();
    handoff = body.handoff;
    document.getElementById('result-message').textContent = body.result.message +
      ' The last step is to send your data to the clan WhatsApp group so the admins can review it.';
    form.classList.add('hidden');
    resultCard.classList.remove('hidden');
  });

  sendButton.addEventListener('click', () => {
    if (!handoff) return;
    navigator.clipboard.writeText(handoff.message).then(() => {
      toast('Data copied!', 'You will be redirected to WhatsApp. Paste the message in the group.', false);
      window.open(handoff.group_link, '_blank');
    }).catch(() => {
      toast('Copy failed.', 'Your data could not be copied. Please copy the message and paste it manually.', true);
      window.open(handoff.group_link, '_blank');
    });
  });
})();"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_hero_and_form() {
        let page = render_page(2026);
        assert!(page.contains("Sav Oficial"));
        assert!(page.contains(HERO_TAGLINE));
        assert!(page.contains("name=\"in_game_name\""));
        assert!(page.contains("name=\"kd_battle_escalation\""));
        assert!(page.contains("name=\"accepts_content_terms\""));
        assert!(page.contains("&copy; 2026 Sav Oficial"));
    }

    #[test]
    fn rank_select_lists_every_tier_highest_first() {
        let page = render_page(2026);
        for tier in RankTier::ALL {
            assert!(page.contains(&format!("value=\"{}\"", tier.slug())));
        }
        let top = page.find("mitico-top-global").expect("top tier present");
        let bottom = page.find("value=\"pro\"").expect("bottom tier present");
        assert!(top < bottom);
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_page(2026), render_page(2026));
    }

    #[test]
    fn escapes_markup_sensitive_characters() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
