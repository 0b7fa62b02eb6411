use tourdesk_shared::{
    Destination, DestinationHotel, Excursion, Itinerary, Package, PackageHotel, TourService,
};

/// The sample Paris package each fresh package screen starts with
pub fn sample_packages() -> Vec<Package> {
    let mut paris = Package::fresh(6, "Paris".to_string());
    paris.hotels = vec![
        PackageHotel::new("Hotel Luxury", "Double"),
        PackageHotel::new("Budget Inn", "Single"),
    ];
    paris.excursions = sample_excursions();
    paris.tour_services = sample_tour_services();
    vec![paris]
}

/// The sample Paris destination each fresh destination screen starts with
pub fn sample_destinations() -> Vec<Destination> {
    let mut paris = Destination::fresh(6, "Paris".to_string());
    paris.hotels = vec![
        DestinationHotel::new("Hotel Luxury", ["Double", "Suite"]),
        DestinationHotel::new("Budget Inn", ["Single"]),
    ];
    paris.excursions = sample_excursions();
    paris.tour_services = sample_tour_services();
    vec![paris]
}

fn sample_excursions() -> Vec<Excursion> {
    vec![Excursion::new("Eiffel Tower Tour"), Excursion::new("Louvre Museum")]
}

fn sample_tour_services() -> Vec<TourService> {
    vec![TourService::new("Airport Transfer"), TourService::new("City Guide")]
}
