//! Static catalog API endpoints
//!
//! Read-only, the content is compiled in

use crate::catalog::PACKAGES;
use crate::catalog::Package;
use crate::catalog::TESTIMONIALS;
use crate::catalog::Testimonial;
use crate::catalog::featured_packages;
use crate::catalog::find_package;

use super::Error;
use super::PathParameters;
use super::Success;

/// List all tour packages
///
/// Request:
/// ```sh
/// curl -v http://localhost:6000/api/packages
/// ```
pub async fn packages() -> Success<&'static [Package]> {
    Success::ok(PACKAGES)
}

/// List the featured tour packages
pub async fn featured() -> Success<Vec<&'static Package>> {
    Success::ok(featured_packages().collect())
}

/// Get a single tour package
///
/// Request:
/// ```sh
/// curl -v http://localhost:6000/api/packages/1
/// ```
pub async fn single_package(
    PathParameters(package_id): PathParameters<u32>,
) -> Result<Success<&'static Package>, Error> {
    find_package(package_id)
        .map(Success::ok)
        .ok_or_else(|| Error::not_found("Package not found"))
}

/// List all testimonials
pub async fn testimonials() -> Success<&'static [Testimonial]> {
    Success::ok(TESTIMONIALS)
}
