//! Static BDD support artifacts
//!
//! Fixed-content scaffolding emitted next to the generated features:
//! the Cucumber world wiring Playwright, lifecycle hooks, and runner
//! configuration. None of it is derived from the migrated input.

/// Cucumber world: owns the Playwright browser/context/page lifecycle
pub const WORLD_JS: &str = r#"const { setWorldConstructor, setDefaultTimeout } = require('@cucumber/cucumber');
const { chromium } = require('playwright');

setDefaultTimeout(30 * 1000);

class CustomWorld {
  constructor({ parameters }) {
    this.baseUrl = parameters.baseUrl || 'http://localhost:3000';
  }

  async open() {
    this.browser = await chromium.launch({ headless: true });
    this.context = await this.browser.newContext();
    this.page = await this.context.newPage();
  }

  async close() {
    if (this.page) await this.page.close();
    if (this.context) await this.context.close();
    if (this.browser) await this.browser.close();
  }
}

setWorldConstructor(CustomWorld);
"#;

/// Before/After hooks driving the world lifecycle
pub const HOOKS_JS: &str = r#"const { Before, After } = require('@cucumber/cucumber');

Before(async function () {
  await this.open();
});

After(async function () {
  await this.close();
});
"#;

/// Cucumber runner configuration
pub const CUCUMBER_CONFIG_JS: &str = r#"module.exports = {
  default: {
    paths: ['features/**/*.feature'],
    require: ['features/step_definitions/**/*.js', 'features/support/**/*.js'],
    format: ['progress'],
  },
};
"#;

/// Playwright configuration for the plain (non-BDD) migration mode
pub const PLAYWRIGHT_CONFIG_JS: &str = r#"const { defineConfig } = require('@playwright/test');

module.exports = defineConfig({
  testDir: './tests',
  use: {
    baseURL: process.env.BASE_URL || 'http://localhost:3000',
    headless: true,
  },
});
"#;

/// devDependencies merged into the target project's package descriptor
pub const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@cucumber/cucumber", "^10.8.0"),
    ("@playwright/test", "^1.45.0"),
    ("playwright", "^1.45.0"),
];

/// npm scripts merged into the target project's package descriptor
pub const SCRIPTS: &[(&str, &str)] = &[
    ("test:e2e", "playwright test"),
    ("test:bdd", "cucumber-js"),
];
