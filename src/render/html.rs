use crate::view::ReportData;

/// Render a self-contained HTML report (data embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    let json = serde_json::to_string(data)?; // embedded as JS object literal

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Place Hours</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .container { display: flex; height: calc(100vh - 58px); }
  .sidebar { width: 360px; border-right: 1px solid #ddd; padding: 12px; overflow: auto; }
  .main { flex: 1; padding: 12px; overflow: auto; }

  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }

  .place-row { cursor: pointer; user-select: none; padding: 4px 6px; border-radius: 4px; }
  .place-row:hover { background: #f3f3f3; }
  .place-row.selected { background: #e9f2ff; border: 1px solid #cfe3ff; }
  .muted { color: #777; font-size: 12px; }

  .chip { display: inline-block; padding: 2px 8px; margin: 2px 4px 2px 0; border: 1px solid #ddd;
          border-radius: 999px; background: #fafafa; font-size: 13px; }

  table { border-collapse: collapse; margin-top: 8px; }
  th, td { border-bottom: 1px solid #eee; padding: 6px 8px; text-align: left; font-size: 14px; }
  th { background: white; border-bottom: 1px solid #ddd; }
  .day-name { font-weight: 600; white-space: nowrap; }
  code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 13px; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
</header>

<div class="container">
  <div class="sidebar">
    <input id="search" placeholder="Search place..." style="width:100%; box-sizing:border-box; padding: 6px 8px; border: 1px solid #ddd; border-radius: 6px; margin-bottom: 8px;">
    <div id="places"></div>
  </div>

  <div class="main">
    <h2 id="title">Select a place</h2>
    <div id="meta" class="muted"></div>
    <div id="chips"></div>

    <table id="hoursTable" style="display:none;">
      <thead>
        <tr>
          <th>day</th>
          <th>hours</th>
        </tr>
      </thead>
      <tbody id="hoursBody"></tbody>
    </table>

    <p id="website"></p>
  </div>
</div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

const state = {
  selected: null,
  search: ""
};

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function renderSummary() {
  const t = DATA.totals;
  const el = document.getElementById("summary");
  el.innerHTML = `
    <span class="pill">places: <b>${t.places}</b></span>
    <span class="pill">with hours: <b>${t.with_hours}</b></span>
    <span class="pill">without hours: <b>${t.without_hours}</b></span>
  `;
}

function placeMatches(place) {
  if (!state.search) return true;
  const s = state.search.toLowerCase();
  return place.name.toLowerCase().includes(s)
    || place.cuisines.some((c) => c.toLowerCase().includes(s));
}

function renderPlaces() {
  const root = document.getElementById("places");
  root.innerHTML = "";

  for (const place of DATA.places) {
    if (!placeMatches(place)) continue;

    const row = document.createElement("div");
    row.className = "place-row" + (state.selected === place.id ? " selected" : "");
    row.onclick = () => selectPlace(place.id);
    row.innerHTML = `${escapeHtml(place.name)} <span class="muted">(${place.cuisines.map(escapeHtml).join(", ")})</span>`;
    root.appendChild(row);
  }
}

function selectPlace(id) {
  state.selected = id;
  const place = DATA.places.find((p) => p.id === id);
  document.getElementById("title").textContent = place.name;

  document.getElementById("meta").textContent =
    `id: ${place.id} | lat: ${place.lat} | lon: ${place.lon}`;

  document.getElementById("chips").innerHTML =
    place.cuisines.map((c) => `<span class="chip">${escapeHtml(c)}</span>`).join("");

  const tbl = document.getElementById("hoursTable");
  const body = document.getElementById("hoursBody");
  body.innerHTML = "";
  tbl.style.display = "table";
  for (const line of place.hours) {
    const tr = document.createElement("tr");
    tr.innerHTML = `
      <td class="day-name">${escapeHtml(line.day)}</td>
      <td><code>${escapeHtml(line.hours)}</code></td>
    `;
    body.appendChild(tr);
  }

  const website = document.getElementById("website");
  if (place.website) {
    website.innerHTML = `<a href="${escapeHtml(place.website)}" target="_blank" rel="noopener noreferrer">Website</a>`;
  } else {
    website.innerHTML = "";
  }

  renderPlaces();
}

document.getElementById("search").addEventListener("input", (e) => {
  state.search = e.target.value || "";
  renderPlaces();
});

renderSummary();
renderPlaces();
if (DATA.places.length) selectPlace(DATA.places[0].id);
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
