//! Inline page assets: stylesheet and the client bootstrap.
//!
//! The bootstrap is the whole client runtime: it delegates DOM events from
//! `data-a_click` / `data-a_change` attributes, POSTs the action to
//! `/actions`, swaps the returned HTML into the mount node, and keeps the
//! browser history in sync with the canonical link. On `popstate` the
//! restored path is sent back as a `route` action.

pub const APP_CSS: &str = "\
*{box-sizing:border-box}\
body{margin:0;font-family:system-ui,sans-serif;color:#1e293b;padding-bottom:4rem}\
.layout{width:80%;margin:0 auto}\
a{cursor:pointer}\
.topbar{position:sticky;top:0;background:#60a5fa;color:#fff}\
.topbar nav{display:flex;justify-content:space-between;align-items:center}\
.brand a{font-size:1.75rem}\
.nav{display:flex;list-style:none;margin:0;padding:0}\
.nav-link{display:inline-block;padding:1.25rem}\
.nav-link:hover{background:#3b82f6;color:#fff}\
.greeting{text-align:center;font-size:2rem}\
.apod h2{text-align:center}\
.apod-image{width:100%;max-height:350px;object-fit:cover}\
.rover-info{margin:.75rem 0}\
.filter-bar{display:flex;justify-content:space-between;align-items:center;border:1px solid #94a3b8;border-radius:6px;margin:.75rem 0;padding:.5rem}\
.filter-bar select,.filter-bar input{border:1px solid #94a3b8;padding:.5rem}\
.photo-grid{display:grid;grid-template-columns:repeat(5,1fr);gap:.75rem;margin:.75rem 0}\
.photo-card{border:1px solid #94a3b8;border-radius:6px;padding:.75rem}\
.photo-card img{width:100%}\
.pagination{display:flex;justify-content:space-between;align-items:center}\
.page-btn{background:#3b82f6;color:#fff;min-width:50px;padding:.5rem;margin:0 .25rem;border:0;border-radius:3px;cursor:pointer}\
.page-btn.current,.page-btn:disabled{background:#cbd5e1;cursor:default}\
.muted{color:#64748b}\
.empty{text-align:center;margin:.75rem 0}\
.error-panel{text-align:center;margin:.75rem 0}\
.loading{text-align:center;padding:2rem}\
.footer{position:fixed;bottom:0;width:100%;padding:.75rem;text-align:center;background:#cbd5e1}";

pub const BOOTSTRAP_JS: &str = r#"(function () {
  var mount = document.getElementById("app");

  function dispatch(action, value) {
    fetch("/actions", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ action: action, payload: { value: value } }),
    })
      .then(function (res) { return res.json(); })
      .then(function (data) {
        mount.innerHTML = data.html;
        if (data.link !== window.location.pathname) {
          window.history.pushState({}, "", data.link);
        }
      })
      .catch(function (err) { console.log("error:", err); });
  }

  document.addEventListener("click", function (event) {
    var el = event.target.closest("[data-a_click]");
    if (el && !el.disabled) { dispatch(el.getAttribute("data-a_click")); }
  });

  document.addEventListener("change", function (event) {
    var action = event.target.getAttribute("data-a_change");
    if (action) { dispatch(action, event.target.value); }
  });

  window.addEventListener("popstate", function () {
    dispatch("route", window.location.pathname);
  });
})();"#;
