//! Check command implementation.

use urlfor::core::SiteContext;
use urlfor::log;

/// Print the site context the resolvers will use.
pub fn run_check(ctx: &SiteContext) {
    let mount = if ctx.mount_path.is_empty() {
        "(none)"
    } else {
        ctx.mount_path.as_str()
    };

    log!("config"; "base url:    {}", ctx.base_url);
    log!("config"; "mount path:  {}", mount);
    log!("config"; "images:      {}", ctx.images_prefix());
    log!(
        "config";
        "routes:      tag={} author={} page={}",
        ctx.route_keywords.tag,
        ctx.route_keywords.author,
        ctx.route_keywords.page
    );
}
