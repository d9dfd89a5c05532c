// Storage tests organized by source submodule
