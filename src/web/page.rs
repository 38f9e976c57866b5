//! The single-page chat UI.
//!
//! Served inline from the binary; no asset pipeline. The page keeps its
//! session id in localStorage, posts submissions to `/api/message`, and
//! re-renders the whole transcript from `/api/transcript/{id}` after every
//! turn, so repeated renders of the same transcript are identical.

use crate::config::UiVariant;
use crate::persona::Persona;

/// Render the chat page for the configured header variant.
pub fn render(persona: &Persona, variant: UiVariant) -> String {
    let header = match variant {
        UiVariant::Banner => format!(
            r#"<div class="banner"><span class="banner-avatar">{avatar}</span>
  <div><h1>{name}</h1><p>Journalist from glorious nation of Kazakistan</p></div></div>"#,
            avatar = persona.avatar,
            name = persona.name,
        ),
        UiVariant::Classic => format!("<h1 class=\"classic\">{} Chat</h1>", persona.name),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{name} Chatbot</title>
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
      min-height: 100vh;
      color: #fff;
      display: flex;
      justify-content: center;
    }}
    .container {{ width: 100%; max-width: 720px; padding: 1.5rem; display: flex; flex-direction: column; height: 100vh; }}
    .banner {{
      display: flex; align-items: center; gap: 1rem;
      padding: 1rem 1.25rem; margin-bottom: 1rem;
      background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1);
      border-radius: 16px;
    }}
    .banner-avatar {{ font-size: 2.5rem; }}
    .banner h1 {{ font-size: 1.3rem; font-weight: 600; }}
    .banner p {{ color: rgba(255,255,255,0.6); font-size: 0.85rem; }}
    h1.classic {{ font-size: 1.3rem; font-weight: 600; margin-bottom: 1rem; }}
    #log {{ flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 0.6rem; padding-bottom: 1rem; }}
    .msg {{ max-width: 85%; padding: 0.6rem 0.9rem; border-radius: 12px; line-height: 1.45; white-space: pre-wrap; }}
    .msg.user {{ align-self: flex-end; background: #2e5cb8; }}
    .msg.assistant {{ align-self: flex-start; background: rgba(255,255,255,0.08); }}
    .msg.error {{ align-self: center; background: rgba(200,60,60,0.35); font-size: 0.85rem; }}
    form {{ display: flex; gap: 0.5rem; }}
    input {{
      flex: 1; padding: 0.7rem 0.9rem; border-radius: 10px; border: 1px solid rgba(255,255,255,0.15);
      background: rgba(255,255,255,0.07); color: #fff; font-size: 1rem; outline: none;
    }}
    button {{
      padding: 0.7rem 1.2rem; border: none; border-radius: 10px; font-size: 1rem; cursor: pointer;
      background: linear-gradient(135deg, #00d9a5 0%, #00b386 100%); color: #06241c; font-weight: 600;
    }}
    button:disabled {{ opacity: 0.5; cursor: wait; }}
  </style>
</head>
<body>
  <div class="container">
    {header}
    <div id="log"></div>
    <form id="chat">
      <input id="input" autocomplete="off" placeholder="Ask {name} anything..." autofocus>
      <button id="send" type="submit">Send</button>
    </form>
  </div>
  <script>
    const log = document.getElementById('log');
    const form = document.getElementById('chat');
    const input = document.getElementById('input');
    const send = document.getElementById('send');
    const AVATAR = '{avatar}';

    let sessionId = localStorage.getItem('borat_session');

    function addBubble(cls, text) {{
      const div = document.createElement('div');
      div.className = 'msg ' + cls;
      div.textContent = cls === 'assistant' ? AVATAR + ' ' + text : text;
      log.appendChild(div);
      log.scrollTop = log.scrollHeight;
    }}

    async function renderTranscript() {{
      if (!sessionId) return;
      const res = await fetch('/api/transcript/' + sessionId);
      if (!res.ok) return;
      const data = await res.json();
      log.innerHTML = '';
      for (const turn of data.turns) addBubble(turn.speaker, turn.text);
    }}

    form.addEventListener('submit', async (e) => {{
      e.preventDefault();
      const content = input.value;
      if (!content.trim()) return;
      input.value = '';
      send.disabled = true;
      addBubble('user', content);
      try {{
        const res = await fetch('/api/message', {{
          method: 'POST',
          headers: {{'Content-Type': 'application/json'}},
          body: JSON.stringify({{ session_id: sessionId, content }}),
        }});
        const data = await res.json();
        sessionId = data.session_id;
        localStorage.setItem('borat_session', sessionId);
        if (data.status === 'error') {{
          addBubble('error', data.error || 'Something went wrong');
        }}
        await renderTranscript();
      }} catch (err) {{
        addBubble('error', 'Request failed: ' + err);
      }} finally {{
        send.disabled = false;
        input.focus();
      }}
    }});

    (async () => {{
      if (sessionId) {{
        await renderTranscript();
      }}
      if (!log.hasChildNodes()) {{
        addBubble('assistant', {greeting_js});
      }}
    }})();
  </script>
</body>
</html>
"#,
        name = persona.name,
        avatar = persona.avatar,
        header = header,
        greeting_js = serde_json::to_string(persona.greeting).unwrap_or_default(),
    )
}
