pub use imu_fileloader as fileloader;
