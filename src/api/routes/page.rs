//! Dashboard Page
//!
//! - GET / - Single-page dashboard. Controls are built from `/api/v1/layout`;
//!   control changes travel over `/ws` and chart updates come back the same way.

use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width,initial-scale=1" />
    <title>Launch Records Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
      body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 16px; color: #222; }
      h1 { text-align: center; color: #503D36; font-size: 40px; }
      .control { margin: 16px 0; }
      .slider-row { display: flex; gap: 12px; align-items: center; }
      .slider-row input[type=range] { flex: 1; }
      .marks { display: flex; justify-content: space-between; font-size: 12px; color: #666; }
      .chart { min-height: 420px; }
      #status { font-size: 12px; color: #888; text-align: right; }
    </style>
  </head>
  <body>
    <h1 id="title">Launch Records Dashboard</h1>
    <div id="status">connecting...</div>

    <div class="control">
      <select id="site-dropdown"></select>
    </div>

    <div id="success-pie-chart" class="chart"></div>

    <div class="control">
      <p>Payload range (Kg): <span id="payload-label"></span></p>
      <div class="slider-row">
        <input id="payload-min" type="range" />
        <input id="payload-max" type="range" />
      </div>
      <div id="payload-marks" class="marks"></div>
    </div>

    <div id="success-payload-scatter-chart" class="chart"></div>

    <script>
      let ws;

      function send(control, value) {
        if (ws && ws.readyState === WebSocket.OPEN) {
          ws.send(JSON.stringify({ type: "set_control", control, value }));
        }
      }

      function sliderValue() {
        const lo = Number(document.getElementById("payload-min").value);
        const hi = Number(document.getElementById("payload-max").value);
        return [Math.min(lo, hi), Math.max(lo, hi)];
      }

      function renderChart(id, figure) {
        const layout = { title: figure.title, margin: { t: 60 } };
        if (figure.kind === "pie") {
          Plotly.react(id, [{
            type: "pie",
            labels: figure.slices.map(s => s.label),
            values: figure.slices.map(s => s.value),
          }], layout);
        } else if (figure.kind === "scatter") {
          const traces = figure.categories.map(cat => {
            const pts = figure.points.filter(p => p.category === cat);
            return {
              type: "scatter", mode: "markers", name: cat,
              x: pts.map(p => p.x), y: pts.map(p => p.y),
              text: pts.map(p => p.site),
            };
          });
          layout.xaxis = { title: figure.x_label };
          layout.yaxis = { title: figure.y_label };
          Plotly.react(id, traces, layout);
        } else {
          layout.annotations = [{ text: figure.message, showarrow: false, font: { size: 18 } }];
          layout.xaxis = { visible: false };
          layout.yaxis = { visible: false };
          Plotly.react(id, [], layout);
        }
      }

      async function buildControls() {
        const layout = await (await fetch("/api/v1/layout")).json();
        document.getElementById("title").textContent = layout.title;
        document.title = layout.title;

        const dropdown = document.getElementById("site-dropdown");
        for (const opt of layout.site_dropdown.options) {
          const el = document.createElement("option");
          el.value = opt.value;
          el.textContent = opt.label;
          dropdown.appendChild(el);
        }
        dropdown.value = layout.site_dropdown.value;
        dropdown.addEventListener("change", () => send("site-dropdown", dropdown.value));

        const s = layout.payload_slider;
        const label = document.getElementById("payload-label");
        ["payload-min", "payload-max"].forEach((id, i) => {
          const el = document.getElementById(id);
          el.min = s.min; el.max = s.max; el.step = s.step;
          el.value = s.value[i];
          el.addEventListener("input", () => { label.textContent = sliderValue().join(" - "); });
          el.addEventListener("change", () => send("payload-slider", sliderValue()));
        });
        label.textContent = s.value.join(" - ");

        const marks = document.getElementById("payload-marks");
        for (const m of s.marks) {
          const el = document.createElement("span");
          el.textContent = m.label;
          marks.appendChild(el);
        }
      }

      function connect() {
        const proto = location.protocol === "https:" ? "wss" : "ws";
        ws = new WebSocket(`${proto}://${location.host}/ws`);
        const status = document.getElementById("status");
        ws.onopen = () => { status.textContent = "live"; };
        ws.onclose = () => { status.textContent = "disconnected, retrying..."; setTimeout(connect, 2000); };
        ws.onmessage = (event) => {
          const msg = JSON.parse(event.data);
          if (msg.type === "chart_update") {
            renderChart(msg.output, msg.figure);
          } else if (msg.type === "connected") {
            document.getElementById("site-dropdown").value = msg.state.site;
            document.getElementById("payload-min").value = msg.state.payload[0];
            document.getElementById("payload-max").value = msg.state.payload[1];
          } else if (msg.type === "error") {
            status.textContent = msg.message;
          }
        };
      }

      buildControls().then(connect);
    </script>
  </body>
</html>
"#;
