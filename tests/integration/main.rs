//! Integration tests for PRD-Harvest
//!
//! These tests use wiremock to serve a miniature reference document and
//! exercise fetching, catalog discovery, feat extraction and the loader
//! registry end-to-end.

mod catalog_tests;
mod feat_tests;
mod registry_tests;

use prd_harvest::config::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BASE_PATH: &str = "/pathfinderRPG/prd/";

pub const ROOT_PAGE: &str = r#"<html><body>
    <ul class="level-1">
      <li><a href="/pathfinderRPG/prd/">Home</a>
        <ul class="level-2">
          <li><a href="/pathfinderRPG/prd/coreRulebook/coreRulebook.html">Core Rulebook</a></li>
          <li><a href="/pathfinderRPG/prd/advancedPlayersGuide/apg.html">APG</a></li>
          <li><a href="/pathfinderRPG/prd/bestiary/monsterIndex.html">Bestiary</a></li>
          <li><a href="http://example.com/elsewhere/">Elsewhere</a></li>
        </ul>
      </li>
    </ul>
    <ul class="level-2">
      <li><a href="/pathfinderRPG/prd/technologyGuide/technologyGuide.html">Tech</a></li>
      <li>Plain text item</li>
    </ul>
</body></html>"#;

pub const FEAT_INDEX: &str = r#"<html><body>
<table>
  <tr><th>Name</th><th>Prerequisites</th><th>Benefit</th></tr>
  <tr class="link-book-core link-type-combat">
    <td><a href="/pathfinderRPG/prd/coreRulebook/feats.html#dodge">Dodge</a></td>
    <td>Dex 13</td>
    <td>+1 dodge bonus to AC</td>
  </tr>
  <tr class="link-book-core link-type-combat">
    <td><a href="/pathfinderRPG/prd/coreRulebook/feats.html#mobility">Mobility</a></td>
    <td>Dex 13, Dodge</td>
    <td>+4 AC against attacks of opportunity</td>
  </tr>
  <tr class="link-book-core">
    <td>Broken Row</td>
    <td>Only two cells</td>
  </tr>
  <tr class="link-book-apg link-type-teamwork">
    <td><a href="/pathfinderRPG/prd/advancedPlayersGuide/advancedFeats.html#x">Coordinated Defense</a></td>
    <td></td>
    <td>+2 CMD when adjacent to an ally with this feat</td>
  </tr>
  <tr class="link-book-techguide link-type-item-creation">
    <td>Craft Cybernetics</td>
    <td>Craft Technological Arms and Armor</td>
    <td>Create cybernetic implants</td>
  </tr>
  <tr class="link-book-b1">
    <td><a href="/pathfinderRPG/prd/bestiary/universalMonsterRules.html">Awesome Blow</a></td>
    <td>Str 25, Improved Bull Rush</td>
    <td>Send opponents flying</td>
  </tr>
</table>
</body></html>"#;

/// Builds a configuration pointing at the mock server
pub fn test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.site.base_url = format!("{}{}", server.uri(), BASE_PATH);
    config.http.timeout_secs = 5;
    config.http.connect_timeout_secs = 2;
    config
}

pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

/// Mounts the root page, expecting exactly `times` requests
pub async fn mount_root(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path(BASE_PATH))
        .respond_with(html(ROOT_PAGE))
        .expect(times)
        .mount(server)
        .await;
}

pub async fn mount_feat_index(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("{}indices/feats.html", BASE_PATH)))
        .respond_with(response)
        .mount(server)
        .await;
}
