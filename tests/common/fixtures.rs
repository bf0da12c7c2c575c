//! Reusable project content

/// A small game: entry, one first-party module, one asset per category and
/// a dependency module
pub const GAME_FILES: &[(&str, &str)] = &[
    (
        "src/main.js",
        "import { Game } from './game.js';\nimport { engine } from 'engine';\nnew Game(engine);\n",
    ),
    ("src/game.js", "export class Game { constructor(e) { this.e = e; } }\n"),
    ("src/css/style.css", "body { margin: 0; background: #000; }\n"),
    ("src/img/player.png", "PNG-bytes"),
    ("src/img/logo.svg", "<svg xmlns=\"http://www.w3.org/2000/svg\"/>"),
    ("src/sfx/jump.mp3", "ID3-bytes"),
    ("src/fonts/pixel.ttf", "TTF-bytes"),
    ("src/levels/one.json", "{\"tiles\": []}"),
    ("node_modules/engine/index.js", "export const engine = { tick() {} };\n"),
];

pub const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <link rel="stylesheet" href="/src/css/style.css">
    <link rel="icon" href="./src/img/logo.svg">
  </head>
  <body>
    <script type="module" src="/src/main.js"></script>
  </body>
</html>
"#;
