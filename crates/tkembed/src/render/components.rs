//! Static markup pieces shared by both embed variants.

use maud::{Markup, PreEscaped, html};

/// Stylesheets loaded by the embed and by exported files.
pub const BOOTSTRAP_CSS_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const TRIPKICKS_CSS_URL: &str = "https://info.tripkicks.com/hubfs/system/mockup/tk-css.css";

/// Client-side libraries: html2canvas for image capture, lucide for icons.
pub const HTML2CANVAS_URL: &str =
    "https://cdn.jsdelivr.net/npm/html2canvas@1.4.1/dist/html2canvas.min.js";
pub const LUCIDE_URL: &str = "https://unpkg.com/lucide@latest/dist/umd/lucide.js";

/// Inline CSS for the embed page.
///
/// The tile is rendered at 4x and scaled down at narrower breakpoints so it
/// reads well inside a Notion column or side peek.
pub const EMBED_CSS: &str = r#"
body{margin:0;padding:0;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,"Apple Color Emoji",Arial,sans-serif;background:#fff;color:#37352f;line-height:1.5;overflow-y:auto}
.embed-container{width:100%;min-height:100vh;display:flex;flex-direction:column;padding:0;box-sizing:border-box}

.tile-section{width:100%;position:relative;flex-shrink:0;display:block;margin-bottom:20px;clear:both;overflow:visible;min-height:200px}
.tile-wrapper{width:100%;max-width:none;margin:0;padding:10px}
.tile-block{transform:scale(4);transform-origin:top left;width:25%;margin-bottom:2rem;box-sizing:border-box;display:block}
.tile-block>*{width:100% !important;max-width:none !important;box-sizing:border-box !important}

.divider{height:1px;background:#e9e9e7;margin:12px 16px 20px 16px;flex-shrink:0;flex-grow:0;clear:both;width:calc(100% - 32px)}

.modal-section{flex:1;min-height:300px;display:flex;flex-direction:column;padding:0 16px 16px 16px;width:100%;clear:both}
.modal-block{border:1px solid #e9e9e7;border-radius:3px;padding:16px;flex:1;overflow:auto;background:#fff;min-height:250px}

.controls{display:flex;gap:8px;margin-top:16px;padding-top:12px;border-top:1px solid #e9e9e7;flex-wrap:wrap;flex-shrink:0}
.btn{background:#fff;border:1px solid #d9d9d6;border-radius:3px;padding:6px 12px;font-size:12px;cursor:pointer;color:#37352f;display:flex;align-items:center;gap:4px;transition:background .1s}
.btn:hover{background:#f7f6f3}
.btn svg{width:14px;height:14px}

.success{position:fixed;top:16px;right:16px;background:#2eaadc;color:#fff;padding:8px 12px;border-radius:3px;font-size:12px;opacity:0;transition:opacity .2s;z-index:1000}
.success.show{opacity:1}

@media(max-width:768px){
.tile-wrapper{width:90%}
.tile-block{transform:scale(1.5);width:66.67%}
}
@media(max-width:480px){
.tile-wrapper{width:95%}
.tile-block{transform:scale(1.2);width:83.33%}
}
@media(max-width:380px){
.tile-wrapper{width:100%;padding:10px}
.tile-block{transform:scale(1);width:100%}
}
"#;

/// Inline script wiring the copy/export controls.
///
/// Expects a global `EXPORT` object (see `render::ExportNames`) declared
/// before it.
pub const EMBED_SCRIPT: &str = r##"
function adjustTileScaling() {
  const tile = document.getElementById('tile');
  const tileSection = document.querySelector('.tile-section');
  const tileWrapper = document.querySelector('.tile-wrapper');

  let scale = 4;
  const transform = window.getComputedStyle(tile).transform;
  if (transform && transform !== 'none') {
    const matrix = transform.match(/matrix\(([^)]+)\)/);
    if (matrix) {
      scale = parseFloat(matrix[1].split(',')[0]);
    }
  }

  const wrapperStyle = window.getComputedStyle(tileWrapper);
  const padding = parseInt(wrapperStyle.paddingTop) + parseInt(wrapperStyle.paddingBottom);
  tileSection.style.height = (tile.scrollHeight * scale + padding) + 'px';
  tile.style.visibility = 'visible';
}

window.addEventListener('load', () => {
  adjustTileScaling();
  setTimeout(adjustTileScaling, 100);
});
window.addEventListener('resize', adjustTileScaling);
if (document.fonts) {
  document.fonts.ready.then(adjustTileScaling);
}

function showSuccess() {
  const success = document.getElementById('success');
  success.classList.add('show');
  setTimeout(() => success.classList.remove('show'), 1500);
}

function download(html, filename) {
  const blob = new Blob([html], { type: 'text/html' });
  const link = document.createElement('a');
  link.download = filename + '.html';
  link.href = URL.createObjectURL(blob);
  link.click();
  URL.revokeObjectURL(link.href);
}

function exportHead(title, style) {
  return `<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="tk-export" content="${EXPORT.builder ? 'builder' : 'live'}">
  <title>${title}</title>
  <link href="${EXPORT.bootstrapCss}" rel="stylesheet">
  <link href="${EXPORT.tripkicksCss}" rel="stylesheet">
  <style>${style}</style>
</head>`;
}

async function captureElement(selector) {
  const element = document.querySelector(selector);
  if (!element) throw new Error('Element not found');
  const canvas = await html2canvas(element, {
    useCORS: true,
    backgroundColor: '#fff',
    scale: 2,
    logging: false
  });
  return new Promise(resolve => canvas.toBlob(resolve, 'image/png'));
}

async function copyImage(selector) {
  try {
    const blob = await captureElement(selector);
    await navigator.clipboard.write([new ClipboardItem({ 'image/png': blob })]);
    showSuccess();
  } catch (err) {
    console.error('Copy failed:', err);
    alert('Copy failed. Please try again.');
  }
}

async function copyText(elementId) {
  try {
    const element = document.getElementById(elementId);
    if (!element) throw new Error('Element not found');
    await navigator.clipboard.writeText(element.innerHTML);
    showSuccess();
  } catch (err) {
    console.error('Copy failed:', err);
    alert('Copy failed. Please try again.');
  }
}

function saveHtml(elementId, filename) {
  try {
    const element = document.getElementById(elementId);
    if (!element) throw new Error('Element not found');
    const contentStyle = elementId === 'tile'
      ? 'background:#156eff;color:#fff;padding:0.5em;border-radius:4px;'
      : 'background:#fff;border:1px solid #ddd;padding:1em;border-radius:4px;';
    const html = exportHead(filename, `body{margin:0;padding:20px;font-family:system-ui}.content{${contentStyle}}`)
      + `<body><div class="content">${element.innerHTML}</div></body></html>`;
    download(html, filename);
  } catch (err) {
    console.error('Save failed:', err);
    alert('Save failed. Please try again.');
  }
}

function exportFullHtml() {
  const tileContent = document.getElementById('tile').innerHTML;
  const modalContent = document.getElementById('modal').innerHTML;
  const style = 'body{margin:0;padding:20px;font-family:system-ui;background:#fff}'
    + '.container{max-width:800px;margin:0 auto}'
    + '.tile{margin-bottom:20px}'
    + '.divider{height:1px;background:#ddd;margin:20px 0}'
    + '.modal{border:1px solid #ddd;padding:20px;border-radius:4px}';
  const html = exportHead(EXPORT.full, style) + `<body>
  <div class="container">
    <div class="tile">${tileContent}</div>
    <div class="divider"></div>
    <div class="modal">${modalContent}</div>
  </div>
</body>
</html>`;
  download(html, EXPORT.full);
}

document.getElementById('refresh').onclick = () => window.location.reload();
document.getElementById('copyTile').onclick = () => copyImage('.tile-wrapper');
document.getElementById('copyModal').onclick = () => copyImage('#modal');
document.getElementById('copyBoth').onclick = () => copyImage('.embed-container');
document.getElementById('exportHtml').onclick = exportFullHtml;
document.getElementById('saveTileHtml').onclick = () => saveHtml('tile', EXPORT.tile);
document.getElementById('saveModalHtml').onclick = () => saveHtml('modal', EXPORT.modal);
document.getElementById('copyTileCode').onclick = () => copyText('tile');
document.getElementById('copyModalCode').onclick = () => copyText('modal');

if (typeof lucide !== 'undefined') {
  lucide.createIcons();
}
"##;

/// Control buttons as (element id, lucide icon, label).
const CONTROLS: &[(&str, &str, &str)] = &[
    ("refresh", "refresh-cw", "Refresh"),
    ("copyTile", "copy", "Copy Tile"),
    ("copyModal", "copy", "Copy Modal"),
    ("copyBoth", "camera", "Copy Both"),
    ("exportHtml", "file-code", "Export HTML"),
    ("saveTileHtml", "code", "Save Tile"),
    ("saveModalHtml", "code-2", "Save Modal"),
    ("copyTileCode", "clipboard-copy", "Copy Tile Code"),
    ("copyModalCode", "clipboard-check", "Copy Modal Code"),
];

/// Render the row of copy/export buttons.
pub fn controls() -> Markup {
    html! {
        div class="controls" {
            @for (id, icon, label) in CONTROLS {
                button class="btn" id=(id) {
                    i data-lucide=(icon) {}
                    (label)
                }
            }
        }
    }
}

/// Inline error banner shown above the tile.
pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="error-banner" style="color:#e03e3e; font-size:14px; padding:8px;" {
            "Error: " (message)
        }
    }
}

/// Wrap trusted JavaScript in a script element.
pub fn inline_script(js: &str) -> Markup {
    html! {
        script { (PreEscaped(js)) }
    }
}
