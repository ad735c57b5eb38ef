//! The curated catalog of topic slugs that can be listed.

/// Topic slugs accepted for topic listings, in alphabetical order.
pub const TOPICS: &[&str] = &[
    "3d",
    "ajax",
    "algorithm",
    "android",
    "angular",
    "animation",
    "api",
    "arduino",
    "artificial-intelligence",
    "aspnet",
    "atom",
    "awesome-list",
    "aws",
    "azure",
    "babel",
    "backend",
    "bash",
    "bitcoin",
    "blockchain",
    "bootstrap",
    "bot",
    "c",
    "chrome",
    "chrome-extension",
    "cli",
    "clojure",
    "code-quality",
    "code-review",
    "compiler",
    "continuous-integration",
    "covid-19",
    "csharp",
    "css",
    "cybersecurity",
    "dart",
    "data-science",
    "deep-learning",
    "deno",
    "devops",
    "django",
    "docker",
    "documentation",
    "dotnet",
    "drupal",
    "electron",
    "elixir",
    "elm",
    "ember",
    "emulator",
    "es6",
    "eslint",
    "ethereum",
    "express",
    "facebook",
    "firebase",
    "firefox",
    "flask",
    "flutter",
    "font",
    "framework",
    "game",
    "game-engine",
    "git",
    "github",
    "go",
    "godot",
    "google",
    "google-cloud",
    "gradle",
    "graphql",
    "haskell",
    "haxl",
    "hbase",
    "home-assistant",
    "html",
    "html5",
    "http",
    "icon",
    "ios",
    "iot",
    "ipfs",
    "java",
    "javascript",
    "jekyll",
    "jenkins",
    "julia",
    "jupyter",
    "kafka",
    "keras",
    "kotlin",
    "kubernetes",
    "language",
    "laravel",
    "learning",
    "library",
    "linux",
    "lua",
    "machine-learning",
    "macos",
    "markdown",
    "mastodon",
    "material",
    "microservices",
    "mongodb",
    "monitoring",
    "music",
    "mysql",
    "natural-language-processing",
    "neural-network",
    "nextjs",
    "nlp",
    "nodejs",
    "nosql",
    "numpy",
    "objective-c",
    "opensource",
    "pandas",
    "parsing",
    "perl",
    "php",
    "plugin",
    "postgresql",
    "powershell",
    "programming",
    "project-management",
    "publishing",
    "pwa",
    "python",
    "pytorch",
    "qt",
    "r",
    "react",
    "react-native",
    "redux",
    "reinforcement-learning",
    "rest",
    "ruby",
    "rust",
    "sass",
    "scala",
    "scripting",
    "sdk",
    "security",
    "server",
    "serverless",
    "shopify",
    "sketch",
    "slack",
    "software",
    "spark",
    "spring",
    "sql",
    "sql-server",
    "ssl",
    "statistics",
    "swift",
    "telegram",
    "tensorflow",
    "terminal",
    "testing",
    "twitter",
    "typescript",
    "ubuntu",
    "ui",
    "unity",
    "unreal-engine",
    "vagrant",
    "vim",
    "virtual-reality",
    "visualization",
    "vue",
    "web",
    "web-components",
    "webapp",
    "webpack",
    "website",
    "windows",
    "wordpress",
    "xamarin",
    "xml",
    "yaml",
    "youtube",
];

/// Returns true if `slug` is in [`TOPICS`].
pub fn is_known_topic(slug: &str) -> bool {
    TOPICS.binary_search(&slug).is_ok()
}
