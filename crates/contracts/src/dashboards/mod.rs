pub mod d400_platform_overview;
