//! IP and geolocation command handlers.

use serde::Serialize;

use flyover_api::{Coordinates, FlyoverClient};

use crate::cli::{CoordsArgs, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct IpOutput<'a> {
    ip: &'a str,
}

fn coords_detail(coords: &Coordinates) -> String {
    format!(
        "Latitude:  {}\nLongitude: {}",
        coords.latitude, coords.longitude
    )
}

/// `flyover ip`
pub async fn handle_ip(
    client: &FlyoverClient,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    let ip = client.fetch_my_ip().await?;
    output::print_success("Returned IP", global.color, global.quiet);
    let out = output::render_single(format, &IpOutput { ip: &ip }, |o| o.ip.to_owned());
    output::print_output(&out);
    Ok(())
}

/// `flyover coords [IP]`: geolocate the given IP, or look up our own first.
pub async fn handle_coords(
    client: &FlyoverClient,
    args: CoordsArgs,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    let ip = match args.ip {
        Some(ip) => ip,
        None => client.fetch_my_ip().await?,
    };
    let coords = client.fetch_coords_by_ip(&ip).await?;
    output::print_success("Returned coordinates", global.color, global.quiet);
    let out = output::render_single(format, &coords, coords_detail);
    output::print_output(&out);
    Ok(())
}
